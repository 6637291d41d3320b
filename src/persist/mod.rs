//! Persistence Coordinator
//!
//! Decides, on load, whether the rendered state comes from the durable
//! store or from a decoded shareable link, and owns the three-store
//! state machine around viewing shared data:
//!
//! - `LOCAL`: the durable store is authoritative; edits persist there.
//! - `VIEWING_SHARED`: a decoded link is rendered; the durable store
//!   is untouched and a session backup of it exists. Two explicit
//!   actions resolve back to `LOCAL`: *eject* (drop the shared view,
//!   restore the backup) and *keep* (adopt the shared view as the new
//!   durable state, drop the backup).
//!
//! Only the coordinator writes the backup or flips the session flag.

pub mod debounce;
pub mod store;
pub mod urlbar;

use crate::codec::state::{self, WIRE_VERSION};
use crate::models::{KittenEntry, KittenRecord};
use self::store::{DurableState, StateStore};

/// What the app should render after the load-time decision
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Normal start: render the durable state (possibly empty)
    Local(DurableState),
    /// A shared link decoded: render its kittens, durable untouched
    Shared {
        kittens: Vec<KittenEntry>,
        backup_at_ms: Option<f64>,
    },
    /// The session flag says a shared view was active but the link
    /// parameter is gone or no longer decodes; render the durable
    /// state and surface the keep/eject choice before dropping the flag
    SharedLinkGone {
        durable: DurableState,
        backup_at_ms: Option<f64>,
    },
}

/// Where an edit's write should land, given the session state
///
/// While the shared flag is set but the link parameter has vanished,
/// nothing may be written anywhere: the address bar was deliberately
/// navigated away from, and the durable store stays frozen until the
/// user resolves the keep/eject choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePath {
    /// Normal operation: save to the durable store
    Durable,
    /// Shared view active: mirror into the address-bar parameter
    AddressBar,
    /// Stale shared flag: hold every write until keep or eject
    Suppressed,
}

impl WritePath {
    pub fn for_state(viewing_shared: bool, shared_link_gone: bool) -> Self {
        if shared_link_gone {
            WritePath::Suppressed
        } else if viewing_shared {
            WritePath::AddressBar
        } else {
            WritePath::Durable
        }
    }
}

#[derive(Clone, Copy)]
pub struct Coordinator<S: StateStore> {
    store: S,
}

impl<S: StateStore> Coordinator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load-time dispatch over the optional shareable-link parameter
    ///
    /// An undecodable parameter fails open: the user lands on their own
    /// durable data as if the parameter were absent. The backup is
    /// taken at most once per shared-view session, before the flag
    /// flips, so re-loading an open shared link never overwrites it.
    pub fn load(&self, link_param: Option<&str>) -> LoadOutcome {
        let decoded = link_param.and_then(state::deserialize);
        match decoded {
            Some(decoded) => {
                if !self.store.is_viewing_shared() {
                    if let Some(durable) = self.store.load_durable() {
                        self.store.save_backup(&durable);
                    }
                    self.store.set_viewing_shared(true);
                }
                LoadOutcome::Shared {
                    kittens: decoded.kittens,
                    backup_at_ms: self.backup_at_ms(),
                }
            }
            None if self.store.is_viewing_shared() => LoadOutcome::SharedLinkGone {
                durable: self.store.load_durable().unwrap_or_default(),
                backup_at_ms: self.backup_at_ms(),
            },
            None => LoadOutcome::Local(self.store.load_durable().unwrap_or_default()),
        }
    }

    /// Persist the rendered records as the durable state
    ///
    /// Suppressed entirely while a shared view is active; in that mode
    /// the address bar, not the durable store, tracks edits.
    pub fn persist(&self, records: &[KittenRecord], counter: u32) {
        if self.store.is_viewing_shared() {
            return;
        }
        self.store.save_durable(&DurableState {
            version: WIRE_VERSION,
            counter,
            kittens: records.to_vec(),
        });
    }

    /// Discard the shared view and return to the pre-shared data
    ///
    /// Restores the durable store from the backup when one exists,
    /// otherwise clears it (the user had nothing before). Returns the
    /// state the form should re-render.
    pub fn eject(&self) -> DurableState {
        let restored = match self.store.load_backup() {
            Some(backup) => {
                self.store.save_durable(&backup.state);
                backup.state
            }
            None => {
                self.store.clear_durable();
                DurableState::default()
            }
        };
        self.store.clear_backup();
        self.store.set_viewing_shared(false);
        restored
    }

    /// Adopt the rendered (formerly shared) records as the new durable
    /// state, discarding the backup without restoring it
    pub fn keep(&self, records: &[KittenRecord], counter: u32) -> DurableState {
        self.store.clear_backup();
        self.store.set_viewing_shared(false);
        let state = DurableState {
            version: WIRE_VERSION,
            counter,
            kittens: records.to_vec(),
        };
        self.store.save_durable(&state);
        state
    }

    pub fn is_viewing_shared(&self) -> bool {
        self.store.is_viewing_shared()
    }

    fn backup_at_ms(&self) -> Option<f64> {
        self.store.load_backup().map(|b| b.captured_at_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::store::memory::MemoryStore;
    use super::*;
    use crate::codec::state::serialize;
    use crate::models::KittenRecord;

    fn named(name: &str) -> KittenRecord {
        KittenRecord {
            name: name.into(),
            weight_lb: "2.0".into(),
            ..Default::default()
        }
    }

    fn durable_with(names: &[&str]) -> DurableState {
        DurableState {
            version: WIRE_VERSION,
            counter: names.len() as u32,
            kittens: names.iter().map(|n| named(n)).collect(),
        }
    }

    #[test]
    fn plain_start_renders_durable() {
        let coordinator = Coordinator::new(MemoryStore::with_durable(durable_with(&["a"])));
        match coordinator.load(None) {
            LoadOutcome::Local(state) => assert_eq!(state.kittens.len(), 1),
            other => panic!("expected Local, got {:?}", other),
        }
        assert!(!coordinator.is_viewing_shared());
    }

    #[test]
    fn first_start_renders_empty_durable() {
        let coordinator = Coordinator::new(MemoryStore::default());
        match coordinator.load(None) {
            LoadOutcome::Local(state) => assert!(state.kittens.is_empty()),
            other => panic!("expected Local, got {:?}", other),
        }
    }

    #[test]
    fn undecodable_link_fails_open_to_local() {
        let store = MemoryStore::with_durable(durable_with(&["a", "b"]));
        let coordinator = Coordinator::new(store);
        match coordinator.load(Some("2|x|1|AA")) {
            LoadOutcome::Local(state) => assert_eq!(state.kittens.len(), 2),
            other => panic!("expected Local, got {:?}", other),
        }
        assert!(!coordinator.is_viewing_shared());
    }

    #[test]
    fn shared_link_backs_up_durable_and_flips_flag() {
        let durable = durable_with(&["a", "b", "c"]);
        let store = MemoryStore::with_durable(durable.clone());
        let coordinator = Coordinator::new(store);

        let wire = serialize(&[named("shared")]).unwrap();
        match coordinator.load(Some(&wire)) {
            LoadOutcome::Shared { kittens, .. } => {
                assert_eq!(kittens.len(), 1);
                assert_eq!(kittens[0].record.name, "shared");
            }
            other => panic!("expected Shared, got {:?}", other),
        }
        assert!(coordinator.is_viewing_shared());
        assert_eq!(coordinator.store.load_backup().unwrap().state, durable);
        // durable itself untouched
        assert_eq!(coordinator.store.load_durable().unwrap(), durable);
    }

    #[test]
    fn reloading_a_shared_link_keeps_the_original_backup() {
        let store = MemoryStore::with_durable(durable_with(&["mine"]));
        let coordinator = Coordinator::new(store);
        let wire = serialize(&[named("shared")]).unwrap();

        coordinator.load(Some(&wire));
        let first_backup = coordinator.store.load_backup().unwrap();

        // user edits while viewing shared, then reloads the tab
        coordinator.store.tick(5_000.0);
        let edited = serialize(&[named("shared-edited")]).unwrap();
        coordinator.load(Some(&edited));

        assert_eq!(coordinator.store.load_backup().unwrap(), first_backup);
    }

    #[test]
    fn persist_is_suppressed_while_viewing_shared() {
        let durable = durable_with(&["mine"]);
        let store = MemoryStore::with_durable(durable.clone());
        let coordinator = Coordinator::new(store);
        let wire = serialize(&[named("shared")]).unwrap();
        coordinator.load(Some(&wire));

        coordinator.persist(&[named("edit-while-shared")], 9);
        assert_eq!(coordinator.store.load_durable().unwrap(), durable);
    }

    #[test]
    fn persist_writes_durable_in_local_mode() {
        let coordinator = Coordinator::new(MemoryStore::default());
        coordinator.persist(&[named("a"), named("b")], 2);
        let state = coordinator.store.load_durable().unwrap();
        assert_eq!(state.kittens.len(), 2);
        assert_eq!(state.counter, 2);
        assert_eq!(state.version, WIRE_VERSION);
    }

    #[test]
    fn eject_restores_the_backup_exactly() {
        let durable = durable_with(&["a", "b", "c"]);
        let store = MemoryStore::with_durable(durable.clone());
        let coordinator = Coordinator::new(store);
        let wire = serialize(&[named("shared")]).unwrap();
        coordinator.load(Some(&wire));

        let restored = coordinator.eject();
        assert_eq!(restored, durable);
        assert_eq!(coordinator.store.load_durable().unwrap(), durable);
        assert!(coordinator.store.load_backup().is_none());
        assert!(!coordinator.is_viewing_shared());
    }

    #[test]
    fn eject_without_backup_clears_durable() {
        // fresh browser: nothing durable before the shared link opened
        let coordinator = Coordinator::new(MemoryStore::default());
        let wire = serialize(&[named("shared")]).unwrap();
        coordinator.load(Some(&wire));

        let restored = coordinator.eject();
        assert!(restored.kittens.is_empty());
        assert!(coordinator.store.load_durable().is_none());
        assert!(!coordinator.is_viewing_shared());
    }

    #[test]
    fn keep_promotes_shared_data_without_restoring() {
        let store = MemoryStore::with_durable(durable_with(&["a", "b", "c"]));
        let coordinator = Coordinator::new(store);
        let shared = [named("shared-1"), named("shared-2")];
        let wire = serialize(&shared).unwrap();
        coordinator.load(Some(&wire));

        let kept = coordinator.keep(&shared, 2);
        assert_eq!(kept.kittens, shared.to_vec());
        assert_eq!(coordinator.store.load_durable().unwrap().kittens, shared.to_vec());
        assert!(coordinator.store.load_backup().is_none());
        assert!(!coordinator.is_viewing_shared());
    }

    #[test]
    fn flag_without_parameter_surfaces_the_choice() {
        let durable = durable_with(&["mine"]);
        let store = MemoryStore::with_durable(durable.clone());
        let coordinator = Coordinator::new(store);
        let wire = serialize(&[named("shared")]).unwrap();
        coordinator.load(Some(&wire));

        // user manually navigated to the bare URL; flag is still set
        match coordinator.load(None) {
            LoadOutcome::SharedLinkGone { durable: d, .. } => assert_eq!(d, durable),
            other => panic!("expected SharedLinkGone, got {:?}", other),
        }
        // nothing mutated until the user picks keep or eject
        assert!(coordinator.is_viewing_shared());
        assert!(coordinator.store.load_backup().is_some());
    }

    #[test]
    fn write_path_follows_the_session_state() {
        assert_eq!(WritePath::for_state(false, false), WritePath::Durable);
        assert_eq!(WritePath::for_state(true, false), WritePath::AddressBar);
        assert_eq!(WritePath::for_state(true, true), WritePath::Suppressed);
    }

    #[test]
    fn stale_shared_flag_holds_every_write() {
        let durable = durable_with(&["mine"]);
        let store = MemoryStore::with_durable(durable.clone());
        let coordinator = Coordinator::new(store);
        let wire = serialize(&[named("shared")]).unwrap();
        coordinator.load(Some(&wire));

        // parameter manually removed: the choice is pending, so the
        // address bar must not be silently repopulated and the durable
        // store must stay frozen
        match coordinator.load(None) {
            LoadOutcome::SharedLinkGone { .. } => {}
            other => panic!("expected SharedLinkGone, got {:?}", other),
        }
        assert_eq!(
            WritePath::for_state(coordinator.is_viewing_shared(), true),
            WritePath::Suppressed
        );
        coordinator.persist(&[named("edited")], 5);
        assert_eq!(coordinator.store.load_durable().unwrap(), durable);
    }

    #[test]
    fn deserialize_alone_never_touches_the_stores() {
        let durable = durable_with(&["mine"]);
        let store = MemoryStore::with_durable(durable.clone());
        let wire = serialize(&[named("other")]).unwrap();
        let _ = crate::codec::state::deserialize(&wire);
        assert_eq!(store.load_durable().unwrap(), durable);
        assert!(store.load_backup().is_none());
    }
}
