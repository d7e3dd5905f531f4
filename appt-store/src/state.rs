//! The global state tree.

use appt_core::appointment::DataSource;
use appt_core::directory::Directory;

/// Root of the shared state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub appointment: AppointmentState,
    pub directory: Directory,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppointmentState {
    pub list: ListState,
}

/// State of the appointment list screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    /// Message of the last failed load, cleared by the next load.
    pub error: Option<String>,
    pub is_fetching: bool,
    pub data_source: DataSource,
    /// The filter differs from the one the current data was loaded with.
    pub should_reload: bool,
}
