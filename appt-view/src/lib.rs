//! The appointment list container, independent of any UI toolkit.
//!
//! - `container`: the event handlers and the load contract
//! - `view`: a pure function from props to a description of the screen
//! - `columns`: the fixed table columns and their cell formatting
//! - `directory_loader`: makes sure the status directory is populated
//!
//! The Dioxus components in `appt-ui` and the CLI in `appt-cmd` both host
//! this crate.

pub mod columns;
pub mod container;
pub mod directory_loader;
pub mod view;

pub use container::AppointmentListContainer;
pub use view::{render, AppointmentListView};
