//! Event handlers of the appointment list container.
//!
//! The container holds no state of its own. Every handler either forwards to
//! a bound action or reads the props it is given; hosts pass the current
//! props in on each call.

use crate::view::{self, AppointmentListView};
use appt_core::dates::DateLike;
use appt_core::filter::{FieldValue, FilterField};
use appt_store::binder::AppointmentListActions;
use appt_store::mapper::AppointmentListProps;

#[derive(Clone)]
pub struct AppointmentListContainer {
    actions: AppointmentListActions,
}

impl AppointmentListContainer {
    pub fn new(actions: AppointmentListActions) -> Self {
        Self { actions }
    }

    /// First mount: load with the filter as it currently stands.
    pub fn on_mount(&self, props: &AppointmentListProps) {
        self.load(props);
    }

    pub fn on_change_filter_field(&self, name: FilterField, value: FieldValue) {
        self.actions.change_filter_field(name, value);
    }

    /// Date widgets hand back a date; the filter stores epoch milliseconds.
    pub fn on_change_filter_date_field<D: DateLike>(&self, name: FilterField, value: Option<D>) {
        let millis = value.map(|d| d.epoch_millis());
        self.actions
            .change_filter_field(name, FieldValue::Instant(millis));
    }

    pub fn on_search(&self, props: &AppointmentListProps) {
        self.load(props);
    }

    /// Dispatch a load with a copy of the current filter. Any load already in
    /// flight keeps running.
    pub fn load(&self, props: &AppointmentListProps) {
        log::debug!("container: load with {:?}", props.data_source.filter);
        self.actions.load(props.data_source.filter.clone());
    }

    pub fn render(&self, props: &AppointmentListProps) -> AppointmentListView {
        view::render(props)
    }
}
