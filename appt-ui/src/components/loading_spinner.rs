//! Loading indicator.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "Table-Loading",
            style: "display: flex; justify-content: center; align-items: center; padding: 24px; color: #666;",
            "Загрузка..."
        }
    }
}
