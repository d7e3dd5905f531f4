//! Core types shared by every appointment-list crate.
//!
//! This crate provides:
//! - `filter`: the search criteria record and typed single-field updates
//! - `appointment`: result rows and the `DataSource` slice that owns them
//! - `directory`: reference data (appointment statuses)
//! - `dates`: epoch-millisecond instants, parsing and display formats
//! - `source`: the contract an appointment backend implements

pub mod appointment;
pub mod dates;
pub mod directory;
pub mod filter;
pub mod source;
