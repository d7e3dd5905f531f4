//! Client-side state store for the appointment list.
//!
//! The [`Store`] owns the [`state::AppState`] tree. Views read it through
//! [`mapper::map_state_to_props`] and write to it only by dispatching
//! [`action::Action`]s, usually through the pre-bound creators from
//! [`binder::bind_action_creators`].
//!
//! # Effects
//!
//! Dispatching a load (`ListAction::Load` or `DirectoryAction::LoadStatuses`)
//! first reduces the request into state, then spawns the fetch against the
//! store's [`AppointmentSource`] and dispatches the outcome when it resolves.
//! Loads are fire-and-forget: a newer load does not cancel an older one, and
//! whichever response arrives last wins.

pub mod action;
pub mod binder;
pub mod mapper;
pub mod reducer;
pub mod state;

use action::{Action, DirectoryAction, ListAction};
use appt_core::filter::FilterPayload;
use appt_core::source::AppointmentSource;
use state::AppState;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// A unit of background work handed to the host's local executor.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// The capability to send an action into shared state.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

type Listener = Rc<dyn Fn(&AppState)>;

struct Inner {
    state: RefCell<AppState>,
    listeners: RefCell<Vec<Listener>>,
    source: Rc<dyn AppointmentSource>,
    spawn: Box<dyn Fn(LocalTask)>,
    load_seq: Cell<u64>,
}

/// Shared application store.
///
/// Cheaply cloneable; clones share the same state. Single-threaded.
#[derive(Clone)]
pub struct Store {
    inner: Rc<Inner>,
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Store {
    /// Create a store over `source`. `spawn` runs fetch tasks on the host's
    /// local executor.
    pub fn new(source: Rc<dyn AppointmentSource>, spawn: impl Fn(LocalTask) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(AppState::default()),
                listeners: RefCell::new(Vec::new()),
                source,
                spawn: Box::new(spawn),
                load_seq: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Call `listener` with a fresh snapshot after every dispatch.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self) {
        let snapshot = self.state();
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn run_effects(&self, action: &Action) {
        match action {
            Action::AppointmentList(ListAction::Load(payload)) => self.spawn_load(payload),
            Action::Directory(DirectoryAction::LoadStatuses) => self.spawn_load_statuses(),
            _ => {}
        }
    }

    fn spawn_load(&self, payload: &FilterPayload) {
        let seq = self.inner.load_seq.get() + 1;
        self.inner.load_seq.set(seq);
        log::info!("store: load #{} started", seq);

        let fetch = self.inner.source.fetch_appointments(payload);
        let filter = payload.clone();
        let store = self.clone();
        (self.inner.spawn)(Box::pin(async move {
            let outcome = match fetch.await {
                Ok(rows) => {
                    log::info!("store: load #{} returned {} rows", seq, rows.len());
                    ListAction::LoadSucceeded { filter, rows }
                }
                Err(e) => {
                    log::error!("store: load #{} failed: {:#}", seq, e);
                    ListAction::LoadFailed {
                        filter,
                        message: format!("{:#}", e),
                    }
                }
            };
            store.dispatch(outcome.into());
        }));
    }

    fn spawn_load_statuses(&self) {
        let fetch = self.inner.source.fetch_statuses();
        let store = self.clone();
        (self.inner.spawn)(Box::pin(async move {
            let outcome = match fetch.await {
                Ok(statuses) => DirectoryAction::StatusesLoaded(statuses),
                Err(e) => {
                    log::error!("store: status directory failed: {:#}", e);
                    DirectoryAction::StatusesFailed(format!("{:#}", e))
                }
            };
            store.dispatch(outcome.into());
        }));
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        log::debug!("store: dispatch {}", action.kind());
        reducer::reduce(&mut self.inner.state.borrow_mut(), &action);
        self.notify();
        self.run_effects(&action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use action::{appointment_list, directory};
    use appt_core::appointment::AppointmentRow;
    use appt_core::directory::StatusEntry;
    use appt_core::filter::{FieldValue, Filter, FilterField};
    use appt_core::source::SourceFuture;

    /// Source returning canned rows and recording every filter it was asked for.
    #[derive(Default)]
    struct FakeSource {
        rows: Vec<AppointmentRow>,
        fail: bool,
        seen: RefCell<Vec<Filter>>,
    }

    impl AppointmentSource for FakeSource {
        fn fetch_appointments(&self, filter: &FilterPayload) -> SourceFuture<Vec<AppointmentRow>> {
            self.seen.borrow_mut().push(filter.clone());
            let result = if self.fail {
                Err(anyhow::anyhow!("backend unavailable"))
            } else {
                Ok(self.rows.clone())
            };
            Box::pin(async move { result })
        }

        fn fetch_statuses(&self) -> SourceFuture<Vec<StatusEntry>> {
            let statuses = vec![
                StatusEntry { id: 1, title: "Planned".into() },
                StatusEntry { id: 2, title: "Done".into() },
            ];
            Box::pin(async move { Ok(statuses) })
        }
    }

    /// Spawned tasks wait here until the test drains them.
    #[derive(Clone, Default)]
    struct TaskQueue(Rc<RefCell<Vec<LocalTask>>>);

    impl TaskQueue {
        fn spawner(&self) -> impl Fn(LocalTask) + 'static {
            let queue = self.0.clone();
            move |task| queue.borrow_mut().push(task)
        }

        fn len(&self) -> usize {
            self.0.borrow().len()
        }

        async fn drain(&self) {
            loop {
                let next = self.0.borrow_mut().pop();
                match next {
                    Some(task) => task.await,
                    None => break,
                }
            }
        }
    }

    fn row(client: &str) -> AppointmentRow {
        AppointmentRow {
            date: 1_700_000_000_000,
            client_name: client.into(),
            status: "Planned".into(),
            holder_name: "Ivanov".into(),
            compliences: String::new(),
            diagnosis: String::new(),
        }
    }

    #[tokio::test]
    async fn load_fetches_and_stores_rows() {
        let source = Rc::new(FakeSource {
            rows: vec![row("a"), row("b")],
            ..FakeSource::default()
        });
        let queue = TaskQueue::default();
        let store = Store::new(source.clone(), queue.spawner());

        store.dispatch(appointment_list::load(Filter::default()));
        assert!(store.state().appointment.list.is_fetching);
        assert_eq!(queue.len(), 1);

        queue.drain().await;
        let list = store.state().appointment.list;
        assert!(!list.is_fetching);
        assert_eq!(list.data_source.data.len(), 2);
        assert_eq!(*source.seen.borrow(), vec![Filter::default()]);
    }

    #[tokio::test]
    async fn failed_load_surfaces_error() {
        let source = Rc::new(FakeSource {
            fail: true,
            ..FakeSource::default()
        });
        let queue = TaskQueue::default();
        let store = Store::new(source, queue.spawner());

        store.dispatch(appointment_list::load(Filter::default()));
        queue.drain().await;

        let list = store.state().appointment.list;
        assert!(!list.is_fetching);
        assert_eq!(list.error.as_deref(), Some("backend unavailable"));
    }

    #[tokio::test]
    async fn filter_edited_while_loading_keeps_reload_flag() {
        let queue = TaskQueue::default();
        let store = Store::new(Rc::new(FakeSource::default()), queue.spawner());

        store.dispatch(appointment_list::load(Filter::default()));
        store.dispatch(appointment_list::change_filter_field(
            FilterField::ClientName,
            FieldValue::Text("Ivanov".into()),
        ));
        queue.drain().await;

        let list = store.state().appointment.list;
        assert!(!list.is_fetching);
        assert!(list.should_reload);

        store.dispatch(appointment_list::load(list.data_source.filter.clone()));
        queue.drain().await;
        assert!(!store.state().appointment.list.should_reload);
    }

    #[tokio::test]
    async fn overlapping_loads_are_not_cancelled() {
        let source = Rc::new(FakeSource {
            rows: vec![row("a")],
            ..FakeSource::default()
        });
        let queue = TaskQueue::default();
        let store = Store::new(source.clone(), queue.spawner());

        store.dispatch(appointment_list::load(Filter::default()));
        store.dispatch(appointment_list::load(Filter::default()));
        assert_eq!(queue.len(), 2, "Both fetches must be in flight");

        queue.drain().await;
        assert_eq!(source.seen.borrow().len(), 2);
        assert!(!store.state().appointment.list.is_fetching);
    }

    #[tokio::test]
    async fn statuses_load_into_directory() {
        let queue = TaskQueue::default();
        let store = Store::new(Rc::new(FakeSource::default()), queue.spawner());

        store.dispatch(directory::load_appointment_statuses());
        assert!(store.state().directory.appointment.status.list.is_fetching);
        queue.drain().await;

        let state = store.state();
        assert_eq!(state.directory.statuses().len(), 2);
        assert!(!state.directory.appointment.status.list.is_fetching);
    }

    #[test]
    fn change_filter_field_spawns_nothing() {
        let queue = TaskQueue::default();
        let store = Store::new(Rc::new(FakeSource::default()), queue.spawner());

        store.dispatch(appointment_list::change_filter_field(
            FilterField::ClientName,
            FieldValue::Text("Ivanov".into()),
        ));
        assert_eq!(queue.len(), 0);
        assert_eq!(
            store.state().appointment.list.data_source.filter.client_name,
            "Ivanov"
        );
    }

    #[test]
    fn subscribers_see_every_dispatch() {
        let queue = TaskQueue::default();
        let store = Store::new(Rc::new(FakeSource::default()), queue.spawner());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |state| {
            sink.borrow_mut()
                .push(state.appointment.list.data_source.filter.only_me)
        });

        store.dispatch(appointment_list::change_filter_field(
            FilterField::OnlyMe,
            FieldValue::Flag(true),
        ));
        store.dispatch(appointment_list::change_filter_field(
            FilterField::OnlyMe,
            FieldValue::Flag(false),
        ));
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn clones_share_state() {
        let queue = TaskQueue::default();
        let store = Store::new(Rc::new(FakeSource::default()), queue.spawner());
        let other = store.clone();
        assert!(store == other);
        other.dispatch(appointment_list::change_filter_field(
            FilterField::StatusId,
            FieldValue::Key(2),
        ));
        assert_eq!(store.state().appointment.list.data_source.filter.status_id, 2);
    }
}
