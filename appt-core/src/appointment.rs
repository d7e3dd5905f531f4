//! Appointment rows and the list data source.

use crate::filter::Filter;
use serde::{Deserialize, Serialize};

/// A single appointment as shown in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRow {
    /// Appointment instant, epoch milliseconds.
    pub date: i64,
    pub client_name: String,
    /// Status title, already resolved from the directory.
    pub status: String,
    pub holder_name: String,
    pub compliences: String,
    pub diagnosis: String,
}

/// The fetched result set together with the filter that produced it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub data: Vec<AppointmentRow>,
    pub filter: Filter,
}
