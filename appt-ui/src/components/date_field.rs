//! Date (and optionally time) filter input.
//!
//! Emits the picked wall-clock time as a `NaiveDateTime`, or `None` when the
//! input is cleared. Conversion to an instant is the container's job.

use appt_core::dates;
use appt_core::filter::FilterField;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DateFieldProps {
    pub name: FilterField,
    /// Current value, epoch milliseconds.
    pub value: Option<i64>,
    #[props(default = false)]
    pub has_time: bool,
    #[props(default = String::new())]
    pub placeholder: String,
    #[props(default = String::new())]
    pub class: String,
    pub onchange: EventHandler<(FilterField, Option<NaiveDateTime>)>,
}

fn parse(raw: &str, has_time: bool) -> Option<NaiveDateTime> {
    if has_time {
        dates::parse_input_value(raw)
    } else {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    }
}

#[component]
pub fn DateField(props: DateFieldProps) -> Element {
    let name = props.name;
    let has_time = props.has_time;
    let onchange = props.onchange;

    let mut value = dates::to_input_value(props.value);
    if !has_time {
        value.truncate(10);
    }
    let input_type = if has_time { "datetime-local" } else { "date" };

    rsx! {
        label {
            class: "{props.class}",
            style: "display: inline-flex; align-items: center; gap: 4px;",
            span { "{props.placeholder}" }
            input {
                r#type: input_type,
                name: name.name(),
                value: "{value}",
                onchange: move |evt: Event<FormData>| onchange.call((name, parse(&evt.value(), has_time))),
            }
        }
    }
}
