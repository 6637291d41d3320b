//! Kitten Card Component
//!
//! One kitten's form inputs plus its computed doses. The card looks
//! its record up reactively by id, so the keyed list keeps DOM nodes
//! (and input focus) stable while edits flow through the store and the
//! app-level change effect handles persistence.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::ConfirmButton;
use crate::context::AppContext;
use crate::dose;
use crate::models::{
    FleaStatus, KittenEntry, KittenRecord, PanacurDays, PonazurilDays, RingwormStatus, Topical,
};
use crate::store::{store_remove_kitten, store_update_record, use_app_store, AppStateStoreFields};

/// Choice-row option tables
const TOPICAL_OPTIONS: &[(Topical, &str)] = &[
    (Topical::Revolution, "Revolution"),
    (Topical::Advantage, "Advantage"),
    (Topical::None, "None"),
];

const FLEA_OPTIONS: &[(FleaStatus, &str)] = &[
    (FleaStatus::Given, "Given"),
    (FleaStatus::Bathed, "Bathed"),
];

const RINGWORM_OPTIONS: &[(RingwormStatus, &str)] = &[
    (RingwormStatus::NotScanned, "Not scanned"),
    (RingwormStatus::Negative, "Negative"),
    (RingwormStatus::Positive, "Positive"),
];

const PANACUR_OPTIONS: &[(PanacurDays, &str)] = &[
    (PanacurDays::One, "1 day"),
    (PanacurDays::Three, "3 days"),
    (PanacurDays::Five, "5 days"),
];

const PONAZURIL_OPTIONS: &[(PonazurilDays, &str)] = &[
    (PonazurilDays::One, "1 day"),
    (PonazurilDays::Three, "3 days"),
];

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

fn input_checked(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.checked()))
        .unwrap_or(false)
}

/// Form card for one kitten
#[component]
pub fn KittenCard(entry: KittenEntry) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = entry.id;
    let record = {
        let id = id.clone();
        Memo::new(move |_| {
            store
                .kittens()
                .get()
                .into_iter()
                .find(|e| e.id == id)
                .map(|e| e.record)
                .unwrap_or_default()
        })
    };

    let remove_id = id.clone();
    let name_id = id.clone();
    let weight_id = id.clone();

    view! {
        <div class="kitten-card">
            <div class="kitten-card-header">
                <input
                    type="text"
                    class="name-input"
                    placeholder="Name..."
                    prop:value=move || record.get().name
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        store_update_record(&store, &name_id, |r| r.name = value);
                    }
                />
                <input
                    type="text"
                    class="weight-input"
                    inputmode="decimal"
                    placeholder="Weight (lb)"
                    prop:value=move || record.get().weight_lb
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        store_update_record(&store, &weight_id, |r| r.weight_lb = value);
                    }
                />
                <ConfirmButton
                    label="×"
                    button_class="remove-btn"
                    on_confirm=Callback::new(move |_| {
                        store_remove_kitten(&store, &remove_id);
                        ctx.commit_persist();
                    })
                />
            </div>

            <div class="choice-row">
                <span class="choice-label">"Topical"</span>
                {TOPICAL_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    let id = id.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if record.get().topical == value { "choice-btn active" } else { "choice-btn" }
                            on:click=move |_| store_update_record(&store, &id, |r| r.topical = value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="choice-row">
                <span class="choice-label">"Flea"</span>
                {FLEA_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    let id = id.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if record.get().flea == value { "choice-btn active" } else { "choice-btn" }
                            on:click=move |_| store_update_record(&store, &id, |r| r.flea = value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="choice-row">
                <span class="choice-label">"Ringworm"</span>
                {RINGWORM_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    let id = id.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if record.get().ringworm == value { "choice-btn active" } else { "choice-btn" }
                            on:click=move |_| store_update_record(&store, &id, |r| r.ringworm = value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="choice-row">
                <span class="choice-label">"Panacur"</span>
                {PANACUR_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    let id = id.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if record.get().panacur_days == value { "choice-btn active" } else { "choice-btn" }
                            on:click=move |_| store_update_record(&store, &id, |r| r.panacur_days = value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="choice-row">
                <span class="choice-label">"Ponazuril"</span>
                {PONAZURIL_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    let id = id.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if record.get().ponazuril_days == value { "choice-btn active" } else { "choice-btn" }
                            on:click=move |_| store_update_record(&store, &id, |r| r.ponazuril_days = value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="day1-row">
                <span class="choice-label">"Given day 1:"</span>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || record.get().day1.panacur
                        on:change={
                            let id = id.clone();
                            move |ev| {
                                let checked = input_checked(&ev);
                                store_update_record(&store, &id, |r| r.day1.panacur = checked);
                            }
                        }
                    />
                    "Panacur"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || record.get().day1.ponazuril
                        on:change={
                            let id = id.clone();
                            move |ev| {
                                let checked = input_checked(&ev);
                                store_update_record(&store, &id, |r| r.day1.ponazuril = checked);
                            }
                        }
                    />
                    "Ponazuril"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || record.get().day1.drontal
                        on:change={
                            let id = id.clone();
                            move |ev| {
                                let checked = input_checked(&ev);
                                store_update_record(&store, &id, |r| r.day1.drontal = checked);
                            }
                        }
                    />
                    "Drontal"
                </label>
            </div>

            <ul class="dose-summary">
                {move || {
                    dose_summary(&record.get())
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

fn dose_summary(record: &KittenRecord) -> Vec<String> {
    let Some(weight) = dose::parse_weight(&record.weight_lb) else {
        return vec!["Enter a weight to see doses".to_string()];
    };
    let mut lines = Vec::new();
    if let Some(topical) = dose::topical_dose(record.topical, weight) {
        lines.push(topical);
    }
    lines.push(format!(
        "Panacur {:.2} ml daily for {} days",
        dose::panacur_ml(weight),
        record.panacur_days.days()
    ));
    lines.push(format!(
        "Ponazuril {:.2} ml daily for {} days",
        dose::ponazuril_ml(weight),
        record.ponazuril_days.days()
    ));
    lines.push(format!("Drontal {}", dose::drontal_tablets(weight)));
    lines
}
