//! Appointment List
//!
//! Data flow:
//! 1. `build.rs` copies `statuses.csv` and `appointments.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On start they are loaded into an in-memory SQLite database, which backs
//!    the store as its appointment source.
//! 4. The `Appointments` screen loads once on mount and again on every search.

use appt_db::Database;
use appt_store::Store;
use appt_ui::components::{Appointments, ErrorDisplay};
use appt_view::view::{TITLE, USER};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::rc::Rc;

const STATUSES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/statuses.csv"));
const APPOINTMENTS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/appointments.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("appointments-root"))
        .launch(App);
}

fn open_database() -> anyhow::Result<Database> {
    let db = Database::new()?.with_current_user(USER);
    db.load_statuses(STATUSES_CSV)?;
    if !APPOINTMENTS_CSV.is_empty() {
        db.load_appointments(APPOINTMENTS_CSV)?;
    }
    Ok(db)
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
fn App() -> Element {
    let store = use_hook(|| {
        open_database()
            .map(|db| {
                Store::new(Rc::new(db), |task| {
                    spawn_forever(task);
                })
            })
            .map_err(|e| {
                log::error!("Failed to open appointment database: {:#}", e);
                format!("Не удалось загрузить данные: {:#}", e)
            })
    });

    use_effect(|| set_document_title(TITLE));

    match store {
        Ok(store) => rsx! {
            Appointments { store }
        },
        Err(message) => rsx! {
            ErrorDisplay { message }
        },
    }
}
