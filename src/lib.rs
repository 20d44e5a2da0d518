//! Browser client for the activities signup page.

pub mod api;
pub mod app;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // 1. Start logging and panic reporting.
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    // 2. Wire the page and kick off the first catalog load.
    app::boot()
}
