//! Screen header with title, current user and an icon slot.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    pub user_name: String,
    #[props(default = String::new())]
    pub class: String,
    /// Icon drawn before the title.
    pub children: Element,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    rsx! {
        div {
            class: "Header {props.class}",
            style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px; border-bottom: 1px solid #E0E0E0;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                {props.children}
                h2 {
                    class: "Header-Title",
                    style: "margin: 0; font-size: 20px;",
                    "{props.title}"
                }
            }
            span {
                class: "Header-User",
                style: "font-size: 14px; color: #555;",
                "{props.user_name}"
            }
        }
    }
}
