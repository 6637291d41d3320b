//! Share Bar Component
//!
//! Derives a shareable link from the current form state on demand.
//! The link is built fresh each time so it always matches what is on
//! screen; opening it in any browser reconstructs the exact form.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ShareBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="share-bar">
            <button
                class="share-btn"
                disabled=move || store.kittens().get().is_empty()
                on:click={
                    let ctx = ctx.clone();
                    move |_| ctx.make_share_link()
                }
            >
                "Create share link"
            </button>

            {move || {
                store.share_link().get().map(|link| view! {
                    <input
                        type="text"
                        class="share-link"
                        readonly=true
                        prop:value=link
                        on:focus=move |ev| {
                            if let Some(target) = ev.target() {
                                use wasm_bindgen::JsCast;
                                if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                                    input.select();
                                }
                            }
                        }
                    />
                })
            }}
        </div>
    }
}
