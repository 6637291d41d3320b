#![allow(warnings)]
//! Kitten Dose Form Entry Point

mod app;
mod codec;
mod components;
mod context;
mod dose;
mod models;
mod persist;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
