//! Actions and action creators.
//!
//! The creator functions in [`appointment_list`] are the full set of intents
//! the appointment list screen may issue; [`crate::binder`] binds exactly
//! these to a dispatcher.

use appt_core::appointment::AppointmentRow;
use appt_core::directory::StatusEntry;
use appt_core::filter::{FieldValue, FilterField, FilterPayload};

/// A request to mutate shared state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AppointmentList(ListAction),
    Directory(DirectoryAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    /// Start a fetch with the given filter snapshot.
    Load(FilterPayload),
    /// Outcome of a load, tagged with the filter it was issued for.
    LoadSucceeded {
        filter: FilterPayload,
        rows: Vec<AppointmentRow>,
    },
    LoadFailed {
        filter: FilterPayload,
        message: String,
    },
    ChangeFilterField { name: FilterField, value: FieldValue },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryAction {
    /// Start a fetch of the appointment status list.
    LoadStatuses,
    StatusesLoaded(Vec<StatusEntry>),
    StatusesFailed(String),
}

impl Action {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AppointmentList(ListAction::Load(_)) => "appointment/list/load",
            Action::AppointmentList(ListAction::LoadSucceeded { .. }) => "appointment/list/loadSucceeded",
            Action::AppointmentList(ListAction::LoadFailed { .. }) => "appointment/list/loadFailed",
            Action::AppointmentList(ListAction::ChangeFilterField { .. }) => {
                "appointment/list/changeFilterField"
            }
            Action::Directory(DirectoryAction::LoadStatuses) => "directory/status/load",
            Action::Directory(DirectoryAction::StatusesLoaded(_)) => "directory/status/loaded",
            Action::Directory(DirectoryAction::StatusesFailed(_)) => "directory/status/failed",
        }
    }
}

impl From<ListAction> for Action {
    fn from(action: ListAction) -> Self {
        Action::AppointmentList(action)
    }
}

impl From<DirectoryAction> for Action {
    fn from(action: DirectoryAction) -> Self {
        Action::Directory(action)
    }
}

/// Action creators for the appointment list.
pub mod appointment_list {
    use super::*;

    pub fn load(payload: FilterPayload) -> Action {
        ListAction::Load(payload).into()
    }

    pub fn change_filter_field(name: FilterField, value: FieldValue) -> Action {
        ListAction::ChangeFilterField { name, value }.into()
    }
}

/// Action creators for the shared directory.
pub mod directory {
    use super::*;

    pub fn load_appointment_statuses() -> Action {
        DirectoryAction::LoadStatuses.into()
    }
}
