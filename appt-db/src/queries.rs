//! Typed queries.
//!
//! Date bounds, status and `onlyMe` are applied in SQL. The free-text fields
//! are matched in Rust because SQLite's `LIKE` only folds ASCII case and the
//! names are mostly Cyrillic.

use crate::Database;
use appt_core::appointment::AppointmentRow;
use appt_core::directory::StatusEntry;
use appt_core::filter::Filter;
use rusqlite::params;

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Database {
    /// All statuses ordered by id.
    pub fn query_statuses(&self) -> anyhow::Result<Vec<StatusEntry>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT id, title FROM statuses ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StatusEntry {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("query: query_statuses returned {} records", rows.len());
        Ok(rows)
    }

    /// Appointments matching `filter`, newest first.
    ///
    /// - `start_date` / `end_date` are inclusive bounds, each optional
    /// - `client_name`, `holder_name`, `compliences` are case-insensitive substrings
    /// - `status_id` is matched exactly when [`Filter::has_status`]
    /// - `only_me` keeps rows held by [`Database::current_user`]
    pub fn query_appointments(&self, filter: &Filter) -> anyhow::Result<Vec<AppointmentRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT a.date, a.client_name, COALESCE(s.title, ''), a.holder_name, a.compliences, a.diagnosis
             FROM appointments a
             LEFT JOIN statuses s ON s.id = a.status_id
             WHERE (?1 IS NULL OR a.date >= ?1)
               AND (?2 IS NULL OR a.date <= ?2)
               AND (?3 IS NULL OR a.status_id = ?3)
               AND (?4 IS NULL OR a.holder_name = ?4)
             ORDER BY a.date DESC, a.id",
        )?;
        let status = filter.has_status().then_some(filter.status_id);
        let holder = filter.only_me.then(|| self.current_user.to_string());
        let rows = stmt
            .query_map(
                params![
                    filter.start_date,
                    filter.end_date,
                    status,
                    holder
                ],
                |row| {
                    Ok(AppointmentRow {
                        date: row.get(0)?,
                        client_name: row.get(1)?,
                        status: row.get(2)?,
                        holder_name: row.get(3)?,
                        compliences: row.get(4)?,
                        diagnosis: row.get(5)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;

        let rows: Vec<AppointmentRow> = rows
            .into_iter()
            .filter(|r| contains_folded(&r.client_name, &filter.client_name))
            .filter(|r| contains_folded(&r.holder_name, &filter.holder_name))
            .filter(|r| contains_folded(&r.compliences, &filter.compliences))
            .collect();
        log::debug!("query: query_appointments returned {} records", rows.len());
        Ok(rows)
    }
}
