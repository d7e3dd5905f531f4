//! Store access from Dioxus components.
//!
//! `UiState` is provided once via `use_context_provider` and retrieved with
//! `use_context::<UiState>()`. The `snapshot` signal mirrors the store after
//! every dispatch, so components reading it re-render on change.

use appt_store::state::AppState;
use appt_store::Store;
use dioxus::prelude::*;

#[derive(Clone)]
pub struct UiState {
    /// Dispatch target for every intent.
    pub store: Store,
    /// Latest store state.
    pub snapshot: Signal<AppState>,
}

impl UiState {
    /// Wrap `store` and subscribe the snapshot signal to it.
    pub fn new(store: Store) -> Self {
        let snapshot = Signal::new(store.state());
        store.subscribe(move |state| {
            let mut snapshot = snapshot;
            snapshot.set(state.clone());
        });
        Self { store, snapshot }
    }
}
