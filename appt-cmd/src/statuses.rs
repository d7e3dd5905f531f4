//! `statuses`: load the status directory through the store and print it.

use crate::list::{local_store, settle};
use appt_core::directory::Directory;
use appt_db::Database;
use appt_view::directory_loader::ensure_appointment_statuses;
use appt_view::view::status_options;

/// Must run inside a `tokio::task::LocalSet`.
pub async fn load_directory(db: Database) -> anyhow::Result<Directory> {
    let store = local_store(db);
    ensure_appointment_statuses(&store, &store.state().directory);
    settle(&store).await;

    let directory = store.state().directory;
    if let Some(err) = &directory.appointment.status.list.error {
        anyhow::bail!("status directory failed: {}", err);
    }
    Ok(directory)
}

pub async fn run_statuses(db: Database) -> anyhow::Result<()> {
    let local = tokio::task::LocalSet::new();
    let directory = local.run_until(load_directory(db)).await?;

    // The unset option has an empty label; skip it.
    for option in status_options(&directory).iter().skip(1) {
        println!("{:>3}  {}", option.value, option.text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn directory_is_loaded_through_the_store() {
        let db = Database::new().unwrap();
        db.load_statuses("ID,TITLE\n1,Запланирован\n3,Завершён\n").unwrap();

        let local = tokio::task::LocalSet::new();
        let directory = local.run_until(load_directory(db)).await.unwrap();
        assert_eq!(directory.statuses().len(), 2);
        assert_eq!(directory.statuses()[1].id, 3);
        assert_eq!(directory.statuses()[1].title, "Завершён");
        assert!(!directory.appointment.status.list.is_fetching);
    }
}
