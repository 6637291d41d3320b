//! Storage Backends
//!
//! The coordinator talks to its three stores (durable localStorage,
//! session-scoped backup, session "viewing shared" flag) through the
//! `StateStore` trait so the transition logic is testable without a
//! browser. `WebStore` is the production implementation; a storage
//! that is denied or disabled makes every operation a silent no-op and
//! the rendered state carries the session on its own.

use serde::{Deserialize, Serialize};
use web_sys::Storage;

use crate::codec::state::WIRE_VERSION;
use crate::models::KittenRecord;

/// localStorage key for the durable snapshot
pub const DURABLE_KEY: &str = "kitten-dose/state";
/// sessionStorage key for the pre-shared-view backup
pub const BACKUP_KEY: &str = "kitten-dose/backup";
/// sessionStorage key for the "viewing a shared link" flag
pub const SHARED_FLAG_KEY: &str = "kitten-dose/viewing-shared";

/// The durable snapshot: version tag, id counter, ordered records
///
/// `counter` backs the `kitten-<n>` identifiers and only ever grows
/// within a session, so removing a kitten never frees its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurableState {
    pub version: u32,
    pub counter: u32,
    pub kittens: Vec<KittenRecord>,
}

impl Default for DurableState {
    fn default() -> Self {
        Self {
            version: WIRE_VERSION,
            counter: 0,
            kittens: Vec::new(),
        }
    }
}

/// Session copy of the durable state taken when a shared link opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub captured_at_ms: f64,
    pub state: DurableState,
}

/// The coordinator's single surface onto all three stores
pub trait StateStore {
    fn load_durable(&self) -> Option<DurableState>;
    fn save_durable(&self, state: &DurableState);
    fn clear_durable(&self);
    fn load_backup(&self) -> Option<BackupSnapshot>;
    fn save_backup(&self, state: &DurableState);
    fn clear_backup(&self);
    fn is_viewing_shared(&self) -> bool;
    fn set_viewing_shared(&self, viewing: bool);
}

/// Browser storage: localStorage for durable, sessionStorage for the
/// backup and flag
#[derive(Clone, Copy, Default)]
pub struct WebStore;

impl WebStore {
    fn local() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn session() -> Option<Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }

    fn read_json<T: for<'de> Deserialize<'de>>(storage: Option<Storage>, key: &str) -> Option<T> {
        let raw = storage?.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                web_sys::console::warn_1(&format!("[STORE] discarding {}: {}", key, e).into());
                None
            }
        }
    }

    fn write_json<T: Serialize>(storage: Option<Storage>, key: &str, value: &T) {
        let Some(storage) = storage else { return };
        if let Ok(raw) = serde_json::to_string(value) {
            // quota or permission failures drop the write, not the session
            let _ = storage.set_item(key, &raw);
        }
    }

    fn remove(storage: Option<Storage>, key: &str) {
        if let Some(storage) = storage {
            let _ = storage.remove_item(key);
        }
    }
}

impl StateStore for WebStore {
    fn load_durable(&self) -> Option<DurableState> {
        let state: DurableState = Self::read_json(Self::local(), DURABLE_KEY)?;
        if state.version != WIRE_VERSION {
            web_sys::console::warn_1(
                &format!("[STORE] ignoring durable state version {}", state.version).into(),
            );
            return None;
        }
        Some(state)
    }

    fn save_durable(&self, state: &DurableState) {
        Self::write_json(Self::local(), DURABLE_KEY, state);
    }

    fn clear_durable(&self) {
        Self::remove(Self::local(), DURABLE_KEY);
    }

    fn load_backup(&self) -> Option<BackupSnapshot> {
        Self::read_json(Self::session(), BACKUP_KEY)
    }

    fn save_backup(&self, state: &DurableState) {
        let snapshot = BackupSnapshot {
            captured_at_ms: js_sys::Date::now(),
            state: state.clone(),
        };
        Self::write_json(Self::session(), BACKUP_KEY, &snapshot);
    }

    fn clear_backup(&self) {
        Self::remove(Self::session(), BACKUP_KEY);
    }

    fn is_viewing_shared(&self) -> bool {
        Self::session()
            .and_then(|s| s.get_item(SHARED_FLAG_KEY).ok().flatten())
            .is_some()
    }

    fn set_viewing_shared(&self, viewing: bool) {
        let Some(session) = Self::session() else { return };
        if viewing {
            let _ = session.set_item(SHARED_FLAG_KEY, "1");
        } else {
            let _ = session.remove_item(SHARED_FLAG_KEY);
        }
    }
}
