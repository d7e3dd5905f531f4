//! Appointment list CLI: filter and print appointments from CSV fixtures.

use clap::Parser;

#[derive(Parser)]
#[command(name = "appt-cli", version, about = "Appointment list toolkit")]
struct Cli {
    #[command(subcommand)]
    command: appt_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("appt-cli starting");
    appt_cmd::run(cli.command).await
}
