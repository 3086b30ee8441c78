//! Grocery Genius Frontend Entry Point

mod app;
mod components;
mod context;
mod gemini;
mod lists;
mod markdown;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Missing credential is fatal: never mount without one
    if gemini::api_key().is_none() {
        web_sys::console::error_1(&"[Main] GEMINI_API_KEY is not set".into());
        panic!("GEMINI_API_KEY environment variable is not set");
    }
    mount_to_body(App);
}
