//! Shared reference data.
//!
//! The nesting mirrors the shape the rest of the application addresses it by:
//! `directory.appointment.status.list.data_source.data`.

use serde::{Deserialize, Serialize};

/// An appointment status as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Directory {
    pub appointment: AppointmentDirectory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppointmentDirectory {
    pub status: StatusDirectory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusDirectory {
    pub list: DirectoryList<StatusEntry>,
}

/// A loadable reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryList<T> {
    pub is_fetching: bool,
    pub error: Option<String>,
    pub data_source: DirectoryData<T>,
}

impl<T> Default for DirectoryList<T> {
    fn default() -> Self {
        Self {
            is_fetching: false,
            error: None,
            data_source: DirectoryData::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryData<T> {
    pub data: Vec<T>,
}

impl<T> Default for DirectoryData<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl Directory {
    /// Appointment statuses currently in the directory.
    pub fn statuses(&self) -> &[StatusEntry] {
        &self.appointment.status.list.data_source.data
    }
}
