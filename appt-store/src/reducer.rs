//! Pure state transitions.

use crate::action::{Action, DirectoryAction, ListAction};
use crate::state::{AppState, ListState};
use appt_core::directory::{DirectoryList, StatusEntry};

/// Apply `action` to `state`.
pub fn reduce(state: &mut AppState, action: &Action) {
    match action {
        Action::AppointmentList(action) => reduce_list(&mut state.appointment.list, action),
        Action::Directory(DirectoryAction::LoadStatuses) => {
            let list = &mut state.directory.appointment.status.list;
            list.is_fetching = true;
            list.error = None;
        }
        Action::Directory(DirectoryAction::StatusesLoaded(statuses)) => {
            reduce_statuses_loaded(&mut state.directory.appointment.status.list, statuses)
        }
        Action::Directory(DirectoryAction::StatusesFailed(message)) => {
            let list = &mut state.directory.appointment.status.list;
            list.is_fetching = false;
            list.error = Some(message.clone());
        }
    }
}

fn reduce_list(list: &mut ListState, action: &ListAction) {
    match action {
        ListAction::Load(_) => {
            list.is_fetching = true;
            list.error = None;
        }
        ListAction::LoadSucceeded { filter, rows } => {
            list.is_fetching = false;
            list.should_reload = *filter != list.data_source.filter;
            list.data_source.data = rows.clone();
        }
        ListAction::LoadFailed { filter, message } => {
            list.is_fetching = false;
            list.should_reload = *filter != list.data_source.filter;
            list.error = Some(message.clone());
        }
        ListAction::ChangeFilterField { name, value } => {
            match list.data_source.filter.set(*name, value.clone()) {
                Ok(()) => list.should_reload = true,
                Err(e) => log::warn!("reducer: {}", e),
            }
        }
    }
}

fn reduce_statuses_loaded(list: &mut DirectoryList<StatusEntry>, statuses: &[StatusEntry]) {
    list.is_fetching = false;
    list.data_source.data = statuses.to_vec();
}

#[cfg(test)]
mod tests {
    use super::*;
    use appt_core::appointment::AppointmentRow;
    use appt_core::filter::{FieldValue, Filter, FilterField};

    fn succeeded(rows: Vec<AppointmentRow>) -> Action {
        ListAction::LoadSucceeded {
            filter: Filter::default(),
            rows,
        }
        .into()
    }

    fn row(client: &str) -> AppointmentRow {
        AppointmentRow {
            date: 0,
            client_name: client.into(),
            status: String::new(),
            holder_name: String::new(),
            compliences: String::new(),
            diagnosis: String::new(),
        }
    }

    #[test]
    fn load_sets_fetching_and_clears_error() {
        let mut state = AppState::default();
        state.appointment.list.error = Some("boom".into());
        reduce(&mut state, &ListAction::Load(Filter::default()).into());
        assert!(state.appointment.list.is_fetching);
        assert_eq!(state.appointment.list.error, None);
    }

    #[test]
    fn load_does_not_touch_the_filter() {
        let mut state = AppState::default();
        let payload = Filter {
            client_name: "Ivanov".into(),
            ..Filter::default()
        };
        reduce(&mut state, &ListAction::Load(payload).into());
        assert_eq!(state.appointment.list.data_source.filter, Filter::default());
    }

    #[test]
    fn load_succeeded_replaces_data() {
        let mut state = AppState::default();
        state.appointment.list.should_reload = true;
        reduce(&mut state, &ListAction::Load(Filter::default()).into());
        reduce(&mut state, &succeeded(vec![row("a"), row("b")]));
        let list = &state.appointment.list;
        assert!(!list.is_fetching);
        assert!(!list.should_reload);
        assert_eq!(list.data_source.data.len(), 2);
    }

    #[test]
    fn load_failed_keeps_previous_data() {
        let mut state = AppState::default();
        reduce(&mut state, &succeeded(vec![row("a")]));
        reduce(&mut state, &ListAction::Load(Filter::default()).into());
        reduce(
            &mut state,
            &ListAction::LoadFailed {
                filter: Filter::default(),
                message: "offline".into(),
            }
            .into(),
        );
        let list = &state.appointment.list;
        assert!(!list.is_fetching);
        assert_eq!(list.error.as_deref(), Some("offline"));
        assert_eq!(list.data_source.data.len(), 1);
    }

    #[test]
    fn edit_during_load_still_needs_reload() {
        let mut state = AppState::default();
        reduce(&mut state, &ListAction::Load(Filter::default()).into());
        reduce(
            &mut state,
            &ListAction::ChangeFilterField {
                name: FilterField::ClientName,
                value: FieldValue::Text("Ivanov".into()),
            }
            .into(),
        );
        reduce(&mut state, &succeeded(Vec::new()));

        let list = &state.appointment.list;
        assert_eq!(list.data_source.filter.client_name, "Ivanov");
        assert!(!list.is_fetching);
        assert!(list.should_reload, "Rows were loaded with the old filter");
    }

    #[test]
    fn failed_load_of_stale_filter_still_needs_reload() {
        let mut state = AppState::default();
        state.appointment.list.data_source.filter.only_me = true;
        reduce(
            &mut state,
            &ListAction::LoadFailed {
                filter: Filter::default(),
                message: "offline".into(),
            }
            .into(),
        );
        assert!(state.appointment.list.should_reload);
    }

    #[test]
    fn load_of_current_filter_clears_reload() {
        let mut state = AppState::default();
        let filter = Filter {
            status_id: 2,
            ..Filter::default()
        };
        state.appointment.list.data_source.filter = filter.clone();
        state.appointment.list.should_reload = true;
        reduce(
            &mut state,
            &ListAction::LoadSucceeded {
                filter,
                rows: vec![row("a")],
            }
            .into(),
        );
        assert!(!state.appointment.list.should_reload);
    }

    #[test]
    fn change_filter_field_updates_one_field() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            &ListAction::ChangeFilterField {
                name: FilterField::ClientName,
                value: FieldValue::Text("Ivanov".into()),
            }
            .into(),
        );
        let list = &state.appointment.list;
        assert!(list.should_reload);
        assert_eq!(
            list.data_source.filter,
            Filter {
                client_name: "Ivanov".into(),
                ..Filter::default()
            }
        );
    }

    #[test]
    fn change_filter_field_ignores_mismatched_value() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            &ListAction::ChangeFilterField {
                name: FilterField::StatusId,
                value: FieldValue::Flag(true),
            }
            .into(),
        );
        assert_eq!(state.appointment.list.data_source.filter, Filter::default());
        assert!(!state.appointment.list.should_reload);
    }

    #[test]
    fn statuses_lifecycle() {
        let mut state = AppState::default();
        reduce(&mut state, &DirectoryAction::LoadStatuses.into());
        assert!(state.directory.appointment.status.list.is_fetching);

        let statuses = vec![StatusEntry { id: 1, title: "Planned".into() }];
        reduce(&mut state, &DirectoryAction::StatusesLoaded(statuses.clone()).into());
        assert!(!state.directory.appointment.status.list.is_fetching);
        assert_eq!(state.directory.statuses(), statuses.as_slice());

        reduce(&mut state, &DirectoryAction::StatusesFailed("down".into()).into());
        assert_eq!(
            state.directory.appointment.status.list.error.as_deref(),
            Some("down")
        );
    }
}
