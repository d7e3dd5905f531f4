//! Dioxus components for the appointment list.
//!
//! This crate provides:
//! - `state`: the store handle and a reactive snapshot of it, shared via context
//! - `components`: form widgets, the table, and the `Appointments` screen
//!
//! Event handling and the view description live in `appt-view`; the
//! components here only draw that description and wire DOM events back.

pub mod components;
pub mod state;
