//! `list`: run the appointment list container headless and print its table.

use appt_core::dates;
use appt_core::filter::{FieldValue, FilterField};
use appt_db::Database;
use appt_store::binder::bind_action_creators;
use appt_store::mapper::map_state_to_props;
use appt_store::Store;
use appt_view::{AppointmentListContainer, AppointmentListView};
use clap::Args;
use std::rc::Rc;

/// Filter criteria, applied through the container's change handlers.
#[derive(Args, Debug, Clone, Default)]
pub struct ListCriteria {
    /// Earliest appointment, `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`
    #[arg(long)]
    pub from: Option<String>,

    /// Latest appointment, `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`
    #[arg(long)]
    pub to: Option<String>,

    /// Client name contains
    #[arg(long)]
    pub client: Option<String>,

    /// Holder name contains
    #[arg(long)]
    pub holder: Option<String>,

    /// Complaints contain
    #[arg(long)]
    pub compliences: Option<String>,

    /// Status id (see `statuses`), -1 for any
    #[arg(long, allow_negative_numbers = true)]
    pub status: Option<i64>,

    /// Only appointments held by --user
    #[arg(long)]
    pub only_me: bool,
}

fn apply_criteria(container: &AppointmentListContainer, criteria: &ListCriteria) -> anyhow::Result<()> {
    if let Some(from) = &criteria.from {
        container.on_change_filter_date_field(FilterField::StartDate, Some(dates::parse_datetime(from)?));
    }
    if let Some(to) = &criteria.to {
        container.on_change_filter_date_field(FilterField::EndDate, Some(dates::parse_datetime(to)?));
    }
    let texts = [
        (FilterField::ClientName, &criteria.client),
        (FilterField::HolderName, &criteria.holder),
        (FilterField::Compliences, &criteria.compliences),
    ];
    for (name, value) in texts {
        if let Some(value) = value {
            container.on_change_filter_field(name, FieldValue::Text(value.clone()));
        }
    }
    if let Some(status) = criteria.status {
        container.on_change_filter_field(FilterField::StatusId, FieldValue::Key(status));
    }
    if criteria.only_me {
        container.on_change_filter_field(FilterField::OnlyMe, FieldValue::Flag(true));
    }
    Ok(())
}

/// Yield to the local executor until no load is in flight.
pub(crate) async fn settle(store: &Store) {
    loop {
        let state = store.state();
        if !state.appointment.list.is_fetching && !state.directory.appointment.status.list.is_fetching {
            break;
        }
        tokio::task::yield_now().await;
    }
}

pub(crate) fn local_store(db: Database) -> Store {
    Store::new(Rc::new(db), |task| {
        tokio::task::spawn_local(task);
    })
}

/// Edit the filter, mount the container, wait for the load, and return the view.
///
/// Must run inside a `tokio::task::LocalSet`.
pub async fn load_view(db: Database, criteria: &ListCriteria) -> anyhow::Result<AppointmentListView> {
    let store = local_store(db);
    let container = AppointmentListContainer::new(bind_action_creators(Rc::new(store.clone())));

    apply_criteria(&container, criteria)?;
    container.on_mount(&map_state_to_props(&store.state()));
    settle(&store).await;

    let props = map_state_to_props(&store.state());
    if let Some(err) = &props.error {
        anyhow::bail!("load failed: {}", err);
    }
    Ok(container.render(&props))
}

/// Plain-text rendering of the view's table.
pub fn render_text(view: &AppointmentListView) -> String {
    let columns = &view.table.columns;
    let header: Vec<String> = columns.iter().map(|c| c.text.to_string()).collect();
    let rows: Vec<Vec<String>> = view
        .table
        .data
        .iter()
        .map(|row| columns.iter().map(|c| c.cell(row)).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = format!("{} ({})\n", view.header.title, view.header.user_name);
    out.push_str(&line(&header));
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

pub async fn run_list(db: Database, criteria: ListCriteria, json: bool) -> anyhow::Result<()> {
    let local = tokio::task::LocalSet::new();
    let view = local.run_until(load_view(db, &criteria)).await?;
    log::info!("list: {} appointments", view.table.data.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&view.table.data)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}
