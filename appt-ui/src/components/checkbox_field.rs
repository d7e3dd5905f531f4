//! Boolean filter checkbox.

use appt_core::filter::{FieldValue, FilterField};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxFieldProps {
    pub name: FilterField,
    pub value: bool,
    pub label: String,
    #[props(default = String::new())]
    pub class: String,
    pub onchange: EventHandler<(FilterField, FieldValue)>,
}

#[component]
pub fn CheckboxField(props: CheckboxFieldProps) -> Element {
    let name = props.name;
    let onchange = props.onchange;

    rsx! {
        label {
            class: "{props.class}",
            style: "display: inline-flex; align-items: center; gap: 4px;",
            input {
                r#type: "checkbox",
                name: name.name(),
                checked: props.value,
                onchange: move |evt: Event<FormData>| onchange.call((name, FieldValue::Flag(evt.checked()))),
            }
            "{props.label}"
        }
    }
}
