//! Contract for whatever backs the appointment list.
//!
//! Fetches are asynchronous and single-threaded: the returned futures are not
//! `Send` and are driven by a local executor chosen by the caller.

use crate::appointment::AppointmentRow;
use crate::directory::StatusEntry;
use crate::filter::FilterPayload;
use std::future::Future;
use std::pin::Pin;

/// A boxed, non-`Send` fetch result.
pub type SourceFuture<T> = Pin<Box<dyn Future<Output = anyhow::Result<T>>>>;

/// A provider of appointments and of the status directory.
pub trait AppointmentSource {
    /// Fetch the appointments matching `filter`.
    fn fetch_appointments(&self, filter: &FilterPayload) -> SourceFuture<Vec<AppointmentRow>>;

    /// Fetch the appointment status catalog.
    fn fetch_statuses(&self) -> SourceFuture<Vec<StatusEntry>>;
}
