//! Write Debouncing
//!
//! Continuous editing (typing a name) coalesces into one persistence
//! write: each scheduled run supersedes any pending one, and only the
//! last in a burst fires. Explicit commit points (add/remove kitten,
//! keep/eject) bypass the window and run immediately.
//!
//! The browser `Timeout` is `!Send`, so handles carry only a key into
//! a thread-local slot table; the handle itself is plain `Copy` data
//! and can live inside types the reactive system requires to be
//! `Send + Sync`. Dropping a superseded or cancelled token is what
//! cancels its timer.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::callback::Timeout;

/// Debounce window in milliseconds
pub const DEBOUNCE_MS: u32 = 400;

/// Keyed cancel-on-drop token slots, one per debouncer
struct PendingTable<T> {
    slots: RefCell<HashMap<u64, T>>,
}

impl<T> PendingTable<T> {
    fn new() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
        }
    }

    /// Park a token under `key`, dropping any token it supersedes
    fn replace(&self, key: u64, token: T) {
        self.slots.borrow_mut().insert(key, token);
    }

    /// Remove and return the token under `key`, if one is pending
    fn take(&self, key: u64) -> Option<T> {
        self.slots.borrow_mut().remove(&key)
    }
}

thread_local! {
    static PENDING: PendingTable<Timeout> = PendingTable::new();
}

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Handle to one debounced write path
#[derive(Clone, Copy)]
pub struct Debounce {
    key: u64,
}

impl Debounce {
    pub fn new() -> Self {
        Self {
            key: NEXT_KEY.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Run `f` after the window elapses, superseding any pending run
    ///
    /// A superseded write never executes even partially.
    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let key = self.key;
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            PENDING.with(|pending| pending.take(key));
            f();
        });
        PENDING.with(|pending| pending.replace(key, timeout));
    }

    /// Cancel anything pending and run `f` right now
    pub fn commit(&self, f: impl FnOnce()) {
        self.cancel();
        f();
    }

    /// Drop a pending run without executing it
    pub fn cancel(&self) {
        PENDING.with(|pending| pending.take(self.key));
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new()
    }
}
