//! Pure description of the appointment list screen.
//!
//! [`render`] turns the props the container reads from shared state into an
//! [`AppointmentListView`]: a header, the filter form in its fixed order, and
//! the results table. Hosts walk this tree and draw it with their own widgets.

use crate::columns::{appointment_columns, Column};
use appt_core::appointment::AppointmentRow;
use appt_core::directory::Directory;
use appt_core::filter::{Filter, FilterField, STATUS_UNSET};
use appt_store::mapper::AppointmentListProps;

pub const TITLE: &str = "Приёмы";
pub const USER: &str = "Иванов Иван Иванович";

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub title: &'static str,
    pub user_name: &'static str,
}

/// One entry of a select widget.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: i64,
    pub text: String,
}

/// A widget in the filter form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Date {
        name: FilterField,
        value: Option<i64>,
        placeholder: &'static str,
        has_time: bool,
    },
    Text {
        name: FilterField,
        value: String,
        placeholder: &'static str,
    },
    Select {
        name: FilterField,
        value: i64,
        placeholder: &'static str,
        options: Vec<SelectOption>,
    },
    Checkbox {
        name: FilterField,
        label: &'static str,
        value: bool,
    },
    SearchButton,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub data: Vec<AppointmentRow>,
    pub is_loading: bool,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentListView {
    pub header: HeaderView,
    pub error: Option<String>,
    pub fields: Vec<FormField>,
    pub table: TableView,
}

/// Status select options: the unset entry, then one per directory status.
pub fn status_options(directory: &Directory) -> Vec<SelectOption> {
    let unset = SelectOption {
        value: STATUS_UNSET,
        text: String::new(),
    };
    std::iter::once(unset)
        .chain(directory.statuses().iter().map(|s| SelectOption {
            value: s.id,
            text: s.title.clone(),
        }))
        .collect()
}

/// The filter form, in display order.
pub fn form_fields(filter: &Filter, directory: &Directory) -> Vec<FormField> {
    vec![
        FormField::Date {
            name: FilterField::StartDate,
            value: filter.start_date,
            placeholder: "С",
            has_time: true,
        },
        FormField::Date {
            name: FilterField::EndDate,
            value: filter.end_date,
            placeholder: "По",
            has_time: true,
        },
        FormField::Text {
            name: FilterField::ClientName,
            value: filter.client_name.clone(),
            placeholder: "Клиент",
        },
        FormField::Text {
            name: FilterField::HolderName,
            value: filter.holder_name.clone(),
            placeholder: "Принимающий",
        },
        FormField::Text {
            name: FilterField::Compliences,
            value: filter.compliences.clone(),
            placeholder: "Жалобы",
        },
        FormField::Select {
            name: FilterField::StatusId,
            value: filter.status_id,
            placeholder: "Статус",
            options: status_options(directory),
        },
        FormField::Checkbox {
            name: FilterField::OnlyMe,
            label: "Только я",
            value: filter.only_me,
        },
        FormField::SearchButton,
    ]
}

/// Describe the whole screen for `props`.
pub fn render(props: &AppointmentListProps) -> AppointmentListView {
    let ds = &props.data_source;
    AppointmentListView {
        header: HeaderView {
            title: TITLE,
            user_name: USER,
        },
        error: props.error.clone(),
        fields: form_fields(&ds.filter, &props.directory),
        table: TableView {
            data: ds.data.clone(),
            is_loading: props.is_fetching,
            columns: appointment_columns(),
        },
    }
}
