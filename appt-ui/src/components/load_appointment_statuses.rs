//! Side-effect-only component: loads the status directory on mount.

use crate::state::UiState;
use appt_view::directory_loader::ensure_appointment_statuses;
use dioxus::prelude::*;

#[component]
pub fn LoadAppointmentStatuses() -> Element {
    let ui = use_context::<UiState>();

    use_effect(move || {
        let directory = ui.snapshot.peek().directory.clone();
        if ensure_appointment_statuses(&ui.store, &directory) {
            log::debug!("directory: requested appointment statuses");
        }
    });

    rsx! {}
}
