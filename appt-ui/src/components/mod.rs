//! Reusable Dioxus RSX components for the appointment list.

mod appointment_list;
mod checkbox_field;
mod date_field;
mod error_display;
mod header;
mod icons;
mod load_appointment_statuses;
mod loading_spinner;
mod select_field;
mod table;
mod text_field;

pub use appointment_list::{AppointmentList, Appointments};
pub use checkbox_field::CheckboxField;
pub use date_field::DateField;
pub use error_display::ErrorDisplay;
pub use header::Header;
pub use icons::{AppointmentIcon, SearchIcon};
pub use load_appointment_statuses::LoadAppointmentStatuses;
pub use loading_spinner::LoadingSpinner;
pub use select_field::SelectField;
pub use table::Table;
pub use text_field::TextField;
