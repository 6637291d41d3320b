//! Kitten List Component
//!
//! Renders every kitten card in display order plus the add and
//! clear-all controls. Adding and clearing are explicit commit points
//! that bypass the persistence debounce.

use leptos::prelude::*;

use crate::components::{ConfirmButton, KittenCard};
use crate::context::AppContext;
use crate::store::{store_add_kitten, store_clear_kittens, use_app_store, AppStateStoreFields};

#[component]
pub fn KittenList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let add_ctx = ctx.clone();
    let clear_ctx = ctx;

    view! {
        <div class="kitten-list">
            <For
                each=move || store.kittens().get()
                key=|entry| entry.id.clone()
                children=move |entry| view! { <KittenCard entry=entry /> }
            />


            <div class="list-controls">
                <button
                    class="add-btn"
                    on:click=move |_| {
                        store_add_kitten(&store);
                        add_ctx.commit_persist();
                    }
                >
                    "+ Add kitten"
                </button>

                <Show when=move || !store.kittens().get().is_empty()>
                    <ConfirmButton
                        label="Clear all"
                        button_class="clear-btn"
                        on_confirm=Callback::new({
                            let clear_ctx = clear_ctx.clone();
                            move |_| {
                                store_clear_kittens(&store);
                                clear_ctx.commit_persist();
                            }
                        })
                    />
                </Show>
            </div>
        </div>
    }
}
