//! Kitten Dose Form App
//!
//! Top-level component: builds the store, runs the load-time
//! persistence dispatch, and wires the change effect that feeds the
//! debounced persist path.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{KittenList, ShareBar, SharedBanner};
use crate::context::AppContext;
use crate::persist::{urlbar, LoadOutcome};
use crate::store::{store_load_durable, store_load_shared, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(store);
    provide_context(ctx.clone());

    // Load-time dispatch: durable data, a decoded shared link, or a
    // stale shared-view flag whose link parameter has gone away.
    match ctx.coordinator().load(urlbar::read_param().as_deref()) {
        LoadOutcome::Local(state) => {
            store_load_durable(&store, &state);
        }
        LoadOutcome::Shared { kittens, backup_at_ms } => {
            web_sys::console::log_1(
                &format!("[APP] viewing shared link with {} kittens", kittens.len()).into(),
            );
            store.viewing_shared().set(true);
            store.backup_at_ms().set(backup_at_ms);
            store_load_shared(&store, kittens);
        }
        LoadOutcome::SharedLinkGone { durable, backup_at_ms } => {
            // render the user's own data but keep the choice on screen;
            // the gone flag holds all writes so the removed parameter
            // is not silently re-added
            store.viewing_shared().set(true);
            store.shared_link_gone().set(true);
            store.backup_at_ms().set(backup_at_ms);
            store_load_durable(&store, &durable);
        }
    }

    // Every edit funnels through the debounced persist path; add and
    // remove commit immediately from their handlers.
    let change_ctx = ctx.clone();
    Effect::new(move |_| {
        let _ = store.kittens().get();
        change_ctx.schedule_persist();
    });

    view! {
        <div class="app-layout">
            <SharedBanner />

            <main class="main-content">
                <h1>"Kitten Dose Calculator"</h1>

                <KittenList />

                <ShareBar />

                <p class="kitten-count">
                    {move || format!("{} kittens", store.kittens().get().len())}
                </p>
            </main>
        </div>
    }
}
