//! CSV loaders.
//!
//! # CSV Formats
//!
//! - **Statuses** (has headers): `ID,TITLE`
//! - **Appointments** (has headers): `DATE,CLIENT,STATUS_ID,HOLDER,COMPLIENCES,DIAGNOSIS`
//!   where `DATE` is `YYYY-MM-DD HH:MM` wall-clock time in the user's zone.

use crate::Database;
use appt_core::dates::{self, DateLike};
use rusqlite::params;

impl Database {
    /// Load the status directory.
    ///
    /// Negative ids are rejected: they would collide with the "unset" sentinel.
    pub fn load_statuses(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id: i64 = r.get(0).unwrap_or("").trim().parse()?;
            let title = r.get(1).unwrap_or("").trim();
            if id < 0 {
                anyhow::bail!("status id {} is negative", id);
            }

            conn.execute(
                "INSERT OR REPLACE INTO statuses (id, title) VALUES (?1, ?2)",
                params![id, title],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} statuses", count);
        Ok(())
    }

    /// Load appointment records. Rows with an empty date are skipped.
    pub fn load_appointments(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let date_str = r.get(0).unwrap_or("").trim();
            if date_str.is_empty() {
                skipped += 1;
                continue;
            }
            let date = dates::parse_datetime(date_str)?.epoch_millis();
            let client_name = r.get(1).unwrap_or("").trim();
            let status_id: i64 = r.get(2).unwrap_or("").trim().parse()?;
            let holder_name = r.get(3).unwrap_or("").trim();
            let compliences = r.get(4).unwrap_or("").trim();
            let diagnosis = r.get(5).unwrap_or("").trim();

            conn.execute(
                "INSERT INTO appointments (date, client_name, status_id, holder_name, compliences, diagnosis)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![date, client_name, status_id, holder_name, compliences, diagnosis],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} appointments, skipped {}", count, skipped);
        Ok(())
    }
}
