//! Shared View Banner
//!
//! Shown while a shared link's data is on screen. Offers the two
//! terminal actions: keep the shared data as your own, or eject it and
//! restore the backed-up data from before the link was opened.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

fn backup_time_label(ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms));
    String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
}

#[component]
pub fn SharedBanner() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let keep_ctx = ctx.clone();
    let eject_ctx = ctx;

    view! {
        <Show when=move || store.viewing_shared().get()>
            <div class="shared-banner">
                <span class="shared-banner-text">
                    "You are viewing shared data. Your own data is safe"
                    {move || {
                        store
                            .backup_at_ms()
                            .get()
                            .map(|ms| format!(" (backed up {})", backup_time_label(ms)))
                            .unwrap_or_default()
                    }}
                    "."
                </span>
                <button
                    class="keep-btn"
                    on:click={
                        let keep_ctx = keep_ctx.clone();
                        move |_| keep_ctx.keep()
                    }
                >
                    "Keep this data"
                </button>
                <button
                    class="eject-btn"
                    on:click={
                        let eject_ctx = eject_ctx.clone();
                        move |_| eject_ctx.eject()
                    }
                >
                    "Restore my data"
                </button>
            </div>
        </Show>
    }
}
