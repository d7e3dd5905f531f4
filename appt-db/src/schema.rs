//! SQL schema for the in-memory database.

/// Returns the full SQL schema as a single batch string.
///
/// - `statuses` - appointment status directory (id, title)
/// - `appointments` - appointment records; `date` is epoch milliseconds
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS statuses (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS appointments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date INTEGER NOT NULL,
        client_name TEXT NOT NULL,
        status_id INTEGER NOT NULL,
        holder_name TEXT NOT NULL,
        compliences TEXT NOT NULL,
        diagnosis TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date);
    CREATE INDEX IF NOT EXISTS idx_appointments_status ON appointments(status_id);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in ["statuses", "appointments"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
