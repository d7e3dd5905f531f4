//! Action creators pre-bound to a dispatcher.

use crate::action::appointment_list;
use crate::Dispatch;
use appt_core::filter::{FieldValue, FilterField, FilterPayload};
use std::rc::Rc;

/// The appointment list action creators, each dispatching on call.
#[derive(Clone)]
pub struct AppointmentListActions {
    dispatch: Rc<dyn Dispatch>,
}

impl AppointmentListActions {
    pub fn load(&self, payload: FilterPayload) {
        self.dispatch.dispatch(appointment_list::load(payload));
    }

    pub fn change_filter_field(&self, name: FilterField, value: FieldValue) {
        self.dispatch
            .dispatch(appointment_list::change_filter_field(name, value));
    }
}

/// Bind every appointment list action creator to `dispatch`.
pub fn bind_action_creators(dispatch: Rc<dyn Dispatch>) -> AppointmentListActions {
    AppointmentListActions { dispatch }
}
