//! Inline SVG icons.

use dioxus::prelude::*;

#[component]
pub fn AppointmentIcon() -> Element {
    rsx! {
        svg {
            class: "Header-Icon",
            width: "28",
            height: "28",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            line { x1: "16", y1: "2", x2: "16", y2: "6" }
            line { x1: "8", y1: "2", x2: "8", y2: "6" }
            line { x1: "3", y1: "10", x2: "21", y2: "10" }
        }
    }
}

#[component]
pub fn SearchIcon() -> Element {
    rsx! {
        svg {
            class: "Appointments-SearchBtnIcon",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            circle { cx: "11", cy: "11", r: "7" }
            line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
        }
    }
}
