//! Tabular renderer for appointment rows.

use crate::components::LoadingSpinner;
use appt_core::appointment::AppointmentRow;
use appt_view::columns::Column;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TableProps {
    pub data: Vec<AppointmentRow>,
    pub columns: Vec<Column>,
    #[props(default = false)]
    pub is_loading: bool,
    #[props(default = String::new())]
    pub class: String,
}

/// Draws `columns` over `data`; the spinner replaces the body while loading.
#[component]
pub fn Table(props: TableProps) -> Element {
    let span = props.columns.len().to_string();
    let headers: Vec<(&str, String, &str)> = props
        .columns
        .iter()
        .map(|c| (c.data_field.key(), c.header_css(), c.text))
        .collect();
    let rows: Vec<Vec<String>> = props
        .data
        .iter()
        .map(|row| props.columns.iter().map(|c| c.cell(row)).collect())
        .collect();

    rsx! {
        table {
            class: "Table {props.class}",
            style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr {
                    for (key, width, text) in headers.iter() {
                        th {
                            "data-field": "{key}",
                            style: "text-align: left; padding: 6px 8px; border-bottom: 2px solid #E0E0E0; {width}",
                            "{text}"
                        }
                    }
                }
            }
            tbody {
                if props.is_loading {
                    tr {
                        td { colspan: "{span}", LoadingSpinner {} }
                    }
                } else if rows.is_empty() {
                    tr {
                        td {
                            colspan: "{span}",
                            style: "padding: 16px; text-align: center; color: #999;",
                            "Нет данных"
                        }
                    }
                } else {
                    for cells in rows.iter() {
                        tr {
                            for cell in cells.iter() {
                                td {
                                    style: "padding: 6px 8px; border-bottom: 1px solid #F0F0F0;",
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
