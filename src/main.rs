#![allow(warnings)]
//! Entre Linhas Landing Page Entry Point

mod models;
mod catalog;
mod config;
mod wizard;
mod order_message;
mod handoff;
mod feedback;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
