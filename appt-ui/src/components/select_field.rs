//! Single-choice filter select.

use appt_core::filter::{FieldValue, FilterField};
use appt_view::view::SelectOption;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectFieldProps {
    pub name: FilterField,
    pub value: i64,
    pub options: Vec<SelectOption>,
    #[props(default = String::new())]
    pub placeholder: String,
    #[props(default = String::new())]
    pub class: String,
    pub onchange: EventHandler<(FilterField, FieldValue)>,
}

#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let name = props.name;
    let onchange = props.onchange;
    let selected = props.value;

    let on_select = move |evt: Event<FormData>| match evt.value().parse::<i64>() {
        Ok(key) => onchange.call((name, FieldValue::Key(key))),
        Err(e) => log::warn!("select {}: ignoring '{}': {}", name, evt.value(), e),
    };

    rsx! {
        label {
            class: "{props.class}",
            style: "display: inline-flex; align-items: center; gap: 4px;",
            span { "{props.placeholder}" }
            select {
                name: name.name(),
                onchange: on_select,
                for opt in props.options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.text}"
                    }
                }
            }
        }
    }
}
