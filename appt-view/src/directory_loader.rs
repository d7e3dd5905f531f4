//! Keeps the appointment status directory populated.

use appt_core::directory::Directory;
use appt_store::action::directory;
use appt_store::Dispatch;

/// Request the status list unless it is loaded, loading, or already failed.
///
/// Returns whether a request was dispatched.
pub fn ensure_appointment_statuses(dispatch: &dyn Dispatch, current: &Directory) -> bool {
    let list = &current.appointment.status.list;
    if !list.data_source.data.is_empty() || list.is_fetching || list.error.is_some() {
        return false;
    }
    dispatch.dispatch(directory::load_appointment_statuses());
    true
}
