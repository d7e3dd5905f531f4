//! Free-text filter input.

use appt_core::filter::{FieldValue, FilterField};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub name: FilterField,
    pub value: String,
    #[props(default = String::new())]
    pub placeholder: String,
    #[props(default = String::new())]
    pub class: String,
    /// Called with `(name, text)` on every edit.
    pub onchange: EventHandler<(FilterField, FieldValue)>,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let name = props.name;
    let onchange = props.onchange;

    rsx! {
        input {
            class: "{props.class}",
            r#type: "text",
            name: name.name(),
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            oninput: move |evt: Event<FormData>| onchange.call((name, FieldValue::Text(evt.value()))),
        }
    }
}
