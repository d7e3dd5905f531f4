//! The appointment list screen.
//!
//! `Appointments` provides the store to its subtree; `AppointmentList` is the
//! container: it maps the store snapshot to props, loads once on mount, and
//! draws the view description from `appt-view` with the widgets of this crate.

use crate::components::{
    AppointmentIcon, CheckboxField, DateField, ErrorDisplay, Header, LoadAppointmentStatuses,
    SearchIcon, SelectField, Table, TextField,
};
use crate::state::UiState;
use appt_core::filter::{FieldValue, FilterField};
use appt_store::binder::bind_action_creators;
use appt_store::mapper::map_state_to_props;
use appt_store::Store;
use appt_view::view::FormField;
use appt_view::AppointmentListContainer;
use chrono::NaiveDateTime;
use dioxus::prelude::*;
use std::rc::Rc;

const FIELD_CLASS: &str = "Appointments-FilterField";

#[derive(Props, Clone, PartialEq)]
pub struct AppointmentsProps {
    pub store: Store,
}

/// Screen root: shares `store` with every component below it.
#[component]
pub fn Appointments(props: AppointmentsProps) -> Element {
    use_context_provider(|| UiState::new(props.store.clone()));

    rsx! {
        AppointmentList {}
    }
}

#[component]
pub fn AppointmentList() -> Element {
    let ui = use_context::<UiState>();
    let snapshot = ui.snapshot;
    let container = use_hook(|| {
        AppointmentListContainer::new(bind_action_creators(Rc::new(ui.store.clone())))
    });

    use_effect({
        let container = container.clone();
        move || {
            let props = map_state_to_props(&snapshot.peek());
            container.on_mount(&props);
        }
    });

    let on_field = use_callback({
        let container = container.clone();
        move |(name, value): (FilterField, FieldValue)| container.on_change_filter_field(name, value)
    });
    let on_date = use_callback({
        let container = container.clone();
        move |(name, value): (FilterField, Option<NaiveDateTime>)| {
            container.on_change_filter_date_field(name, value)
        }
    });
    let on_search = use_callback({
        let container = container.clone();
        move |_: ()| {
            let props = map_state_to_props(&snapshot.peek());
            container.on_search(&props);
        }
    });

    let props = map_state_to_props(&snapshot.read());
    let view = container.render(&props);

    rsx! {
        div {
            class: "Appointments",
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            Header {
                title: view.header.title.to_string(),
                user_name: view.header.user_name.to_string(),
                class: "Appointments-Header".to_string(),
                AppointmentIcon {}
            }
            div {
                class: "Appointments-Body",
                style: "padding: 16px;",
                div {
                    class: "Appointments-Filter",
                    LoadAppointmentStatuses {}
                    form {
                        class: "Appointments-FilterForm",
                        style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 12px;",
                        onsubmit: move |evt: FormEvent| evt.prevent_default(),
                        for field in view.fields.iter() {
                            FilterWidget {
                                field: field.clone(),
                                on_field,
                                on_date,
                                on_search,
                            }
                        }
                    }
                }
                if let Some(err) = view.error.clone() {
                    ErrorDisplay { message: err }
                }
                Table {
                    data: view.table.data.clone(),
                    columns: view.table.columns.clone(),
                    is_loading: view.table.is_loading,
                    class: "AppointmentList".to_string(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FilterWidgetProps {
    field: FormField,
    on_field: EventHandler<(FilterField, FieldValue)>,
    on_date: EventHandler<(FilterField, Option<NaiveDateTime>)>,
    on_search: EventHandler<()>,
}

/// Draws one entry of the filter form with the matching widget.
#[component]
fn FilterWidget(props: FilterWidgetProps) -> Element {
    let on_search = props.on_search;

    match props.field {
        FormField::Date { name, value, placeholder, has_time } => rsx! {
            DateField {
                name,
                value,
                has_time,
                placeholder: placeholder.to_string(),
                class: FIELD_CLASS.to_string(),
                onchange: props.on_date,
            }
        },
        FormField::Text { name, value, placeholder } => rsx! {
            TextField {
                name,
                value,
                placeholder: placeholder.to_string(),
                class: FIELD_CLASS.to_string(),
                onchange: props.on_field,
            }
        },
        FormField::Select { name, value, placeholder, options } => rsx! {
            SelectField {
                name,
                value,
                options,
                placeholder: placeholder.to_string(),
                class: FIELD_CLASS.to_string(),
                onchange: props.on_field,
            }
        },
        FormField::Checkbox { name, label, value } => rsx! {
            CheckboxField {
                name,
                value,
                label: label.to_string(),
                class: FIELD_CLASS.to_string(),
                onchange: props.on_field,
            }
        },
        FormField::SearchButton => rsx! {
            button {
                class: "Appointments-SearchBtn",
                r#type: "button",
                onclick: move |_| on_search.call(()),
                SearchIcon {}
            }
        },
    }
}
