//! Read projection from the global state tree to the list screen's props.

use crate::state::AppState;
use appt_core::appointment::DataSource;
use appt_core::directory::Directory;

/// Everything the appointment list screen reads from shared state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppointmentListProps {
    pub error: Option<String>,
    pub is_fetching: bool,
    pub data_source: DataSource,
    pub should_reload: bool,
    pub directory: Directory,
}

/// Project the state tree onto [`AppointmentListProps`]. Pure and infallible.
pub fn map_state_to_props(state: &AppState) -> AppointmentListProps {
    let list = &state.appointment.list;
    AppointmentListProps {
        error: list.error.clone(),
        is_fetching: list.is_fetching,
        data_source: list.data_source.clone(),
        should_reload: list.should_reload,
        directory: state.directory.clone(),
    }
}
