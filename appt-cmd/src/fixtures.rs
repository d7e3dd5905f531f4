//! Opening the appointment database from CSV fixtures.

use crate::FixtureArgs;
use appt_db::Database;
use std::fs;
use std::path::Path;

const STATUSES_CSV: &str = include_str!("../../fixtures/statuses.csv");
const APPOINTMENTS_CSV: &str = include_str!("../../fixtures/appointments.csv");

fn read_or(path: Option<&Path>, embedded: &'static str) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e)),
        None => Ok(embedded.to_string()),
    }
}

pub fn open_database(args: &FixtureArgs) -> anyhow::Result<Database> {
    let statuses = read_or(args.statuses_csv.as_deref(), STATUSES_CSV)?;
    let appointments = read_or(args.appointments_csv.as_deref(), APPOINTMENTS_CSV)?;

    let db = Database::new()?.with_current_user(&args.user);
    db.load_statuses(&statuses)?;
    db.load_appointments(&appointments)?;
    Ok(db)
}
