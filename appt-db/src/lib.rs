//! In-memory SQLite appointment source.
//!
//! Loads the status directory and appointment records from CSV text into an
//! in-memory SQLite database and answers filtered list queries. It stands in
//! for the remote backend: no data is ever written to disk.
//!
//! # Usage
//!
//! ```rust
//! use appt_core::filter::Filter;
//! use appt_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_statuses("ID,TITLE\n1,Planned\n").unwrap();
//! db.load_appointments(
//!     "DATE,CLIENT,STATUS_ID,HOLDER,COMPLIENCES,DIAGNOSIS\n2026-10-01 09:00,Petrov,1,Ivanov,Headache,\n",
//! ).unwrap();
//!
//! let rows = db.query_appointments(&Filter::default()).unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].status, "Planned");
//! ```

pub mod schema;
mod loader;
mod queries;
mod source;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory appointment database.
///
/// Cheaply cloneable (via `Rc`); clones share the same connection. Suitable
/// for single-threaded WASM and for a current-thread runtime.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
    current_user: Rc<str>,
}

impl Database {
    /// Create an empty database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
            current_user: Rc::from(""),
        })
    }

    /// Set the holder name that `onlyMe` filters on.
    pub fn with_current_user(mut self, name: &str) -> Self {
        self.current_user = Rc::from(name);
        self
    }

    pub fn current_user(&self) -> &str {
        &self.current_user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        assert!(Database::new().is_ok());
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_statuses("ID,TITLE\n1,Planned\n").unwrap();
        let statuses = db2.query_statuses().unwrap();
        assert_eq!(statuses.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn current_user_defaults_to_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.current_user(), "");
        let db = db.with_current_user("Ivanov");
        assert_eq!(db.current_user(), "Ivanov");
    }
}
