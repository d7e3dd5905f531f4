use crate::Database;
use appt_core::appointment::AppointmentRow;
use appt_core::directory::StatusEntry;
use appt_core::filter::FilterPayload;
use appt_core::source::{AppointmentSource, SourceFuture};

/// Queries run synchronously; the result is handed back as an already-ready future.
impl AppointmentSource for Database {
    fn fetch_appointments(&self, filter: &FilterPayload) -> SourceFuture<Vec<AppointmentRow>> {
        let result = self.query_appointments(filter);
        Box::pin(async move { result })
    }

    fn fetch_statuses(&self) -> SourceFuture<Vec<StatusEntry>> {
        let result = self.query_statuses();
        Box::pin(async move { result })
    }
}
