//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store
//! is the "visible inputs" surface the persistence core talks to:
//! components render from it, and the coordinator repopulates it when
//! a shared link loads or an eject/keep transition re-renders.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{KittenEntry, KittenRecord};
use crate::persist::store::DurableState;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered kittens in display order
    pub kittens: Vec<KittenEntry>,
    /// Id counter behind `kitten-<n>`; grows only, never reused
    pub next_id: u32,
    /// A decoded shared link is the active view
    pub viewing_shared: bool,
    /// Shared flag was set but the link parameter vanished; all writes
    /// pause until the user picks keep or eject
    pub shared_link_gone: bool,
    /// Capture time of the session backup, for the restore banner
    pub backup_at_ms: Option<f64>,
    /// Last generated share link, shown in the share bar
    pub share_link: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a fresh default kitten, returning its id
pub fn store_add_kitten(store: &AppStore) -> String {
    let n = store.next_id().get_untracked() + 1;
    store.next_id().set(n);
    let entry = KittenEntry::new(n, KittenRecord::default());
    let id = entry.id.clone();
    store.kittens().write().push(entry);
    id
}

/// Remove a kitten by id (its id is never handed out again)
pub fn store_remove_kitten(store: &AppStore, kitten_id: &str) {
    store.kittens().write().retain(|entry| entry.id != kitten_id);
}

/// Drop all kittens; the counter keeps its value
pub fn store_clear_kittens(store: &AppStore) {
    store.kittens().write().clear();
}

/// Mutate one kitten's record in place
pub fn store_update_record(
    store: &AppStore,
    kitten_id: &str,
    update: impl FnOnce(&mut KittenRecord),
) {
    if let Some(entry) = store
        .kittens()
        .write()
        .iter_mut()
        .find(|entry| entry.id == kitten_id)
    {
        update(&mut entry.record);
    }
}

/// Current records in display order (for encoding/persisting)
pub fn store_records(store: &AppStore) -> Vec<KittenRecord> {
    store
        .kittens()
        .get_untracked()
        .into_iter()
        .map(|entry| entry.record)
        .collect()
}

/// Replace the rendered kittens from a durable snapshot
pub fn store_load_durable(store: &AppStore, state: &DurableState) {
    let kittens: Vec<KittenEntry> = state
        .kittens
        .iter()
        .enumerate()
        .map(|(i, rec)| KittenEntry::new(i as u32 + 1, rec.clone()))
        .collect();
    let floor = kittens.len() as u32;
    store.next_id().set(state.counter.max(floor));
    store.kittens().set(kittens);
}

/// Replace the rendered kittens from decoded shared-link entries
pub fn store_load_shared(store: &AppStore, entries: Vec<KittenEntry>) {
    store.next_id().set(entries.len() as u32);
    store.kittens().set(entries);
}
