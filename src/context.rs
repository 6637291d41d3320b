//! Application Context
//!
//! Shared handles provided via the Leptos Context API. The context
//! owns the one debounced persistence path and the keep/eject/share
//! actions, so components never touch storage or the address bar
//! directly.

use leptos::prelude::*;

use crate::codec::state;
use crate::persist::debounce::Debounce;
use crate::persist::store::WebStore;
use crate::persist::{urlbar, Coordinator, WritePath};
use crate::store::{store_load_durable, store_records, AppStateStoreFields, AppStore};

#[derive(Clone)]
pub struct AppContext {
    store: AppStore,
    coordinator: Coordinator<WebStore>,
    debounce: Debounce,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            coordinator: Coordinator::new(WebStore),
            debounce: Debounce::new(),
        }
    }

    pub fn coordinator(&self) -> &Coordinator<WebStore> {
        &self.coordinator
    }

    /// Debounced persist: typing coalesces into one write
    pub fn schedule_persist(&self) {
        let store = self.store;
        let coordinator = self.coordinator;
        self.debounce.schedule(move || flush(store, &coordinator));
    }

    /// Immediate persist for explicit commit points (add/remove)
    pub fn commit_persist(&self) {
        let store = self.store;
        self.debounce.commit(|| flush(store, &self.coordinator));
    }

    /// Discard the shared view and re-render the restored durable data
    pub fn eject(&self) {
        self.debounce.cancel();
        let restored = self.coordinator.eject();
        urlbar::clear();
        self.store.viewing_shared().set(false);
        self.store.shared_link_gone().set(false);
        self.store.backup_at_ms().set(None);
        store_load_durable(&self.store, &restored);
    }

    /// Adopt the shared view as the new durable data
    pub fn keep(&self) {
        self.debounce.cancel();
        let records = store_records(&self.store);
        let counter = self.store.next_id().get_untracked();
        self.coordinator.keep(&records, counter);
        urlbar::clear();
        self.store.viewing_shared().set(false);
        self.store.shared_link_gone().set(false);
        self.store.backup_at_ms().set(None);
    }

    /// Derive a shareable URL for the current records, if any
    pub fn make_share_link(&self) {
        let records = store_records(&self.store);
        let link = state::serialize(&records).and_then(|wire| urlbar::share_url(&wire));
        self.store.share_link().set(link);
    }
}

/// The one write path: durable store in local mode, address bar while
/// a shared view is active, nothing while a stale shared flag awaits
/// the keep/eject choice
fn flush(store: AppStore, coordinator: &Coordinator<WebStore>) {
    let path = WritePath::for_state(
        store.viewing_shared().get_untracked(),
        store.shared_link_gone().get_untracked(),
    );
    match path {
        WritePath::Suppressed => {}
        WritePath::AddressBar => {
            let records = store_records(&store);
            urlbar::rewrite(state::serialize(&records).as_deref());
        }
        WritePath::Durable => {
            let records = store_records(&store);
            coordinator.persist(&records, store.next_id().get_untracked());
        }
    }
}
