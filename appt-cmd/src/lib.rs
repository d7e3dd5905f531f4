//! Command implementations for the appointment list CLI.
//!
//! The commands drive the same container as the web screen, headless: the
//! filter is edited through the container's handlers, a load is dispatched
//! into the store, and the resulting view is printed.

use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod fixtures;
pub mod list;
pub mod statuses;

#[derive(Subcommand)]
pub enum Command {
    /// List appointments matching a filter
    List {
        #[command(flatten)]
        fixtures: FixtureArgs,

        #[command(flatten)]
        criteria: list::ListCriteria,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the appointment status directory
    Statuses {
        #[command(flatten)]
        fixtures: FixtureArgs,
    },
}

/// Where the data comes from. Embedded fixtures are used when paths are omitted.
#[derive(Args, Debug, Clone)]
pub struct FixtureArgs {
    /// Status directory CSV (`ID,TITLE`)
    #[arg(long)]
    pub statuses_csv: Option<PathBuf>,

    /// Appointments CSV (`DATE,CLIENT,STATUS_ID,HOLDER,COMPLIENCES,DIAGNOSIS`)
    #[arg(long)]
    pub appointments_csv: Option<PathBuf>,

    /// Holder name that --only-me matches
    #[arg(long, default_value = appt_view::view::USER)]
    pub user: String,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::List {
            fixtures,
            criteria,
            json,
        } => {
            let db = fixtures::open_database(&fixtures)?;
            list::run_list(db, criteria, json).await
        }
        Command::Statuses { fixtures } => {
            let db = fixtures::open_database(&fixtures)?;
            statuses::run_statuses(db).await
        }
    }
}
