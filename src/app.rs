use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::ui::handlers::{self, AppContext};
use crate::ui::notify::Notifier;
use crate::ui::page::Page;

pub fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // 1. Resolve the fixed page elements.
    let page = Page::attach(&document).map_err(|err| JsValue::from_str(&err.to_string()))?;

    // 2. Anchor the API client to the page origin.
    let api = ApiClient::from_window(&window)?;

    let notifier = Rc::new(Notifier::new(window.clone(), page.message.clone()));
    let ctx = AppContext {
        window,
        page: Rc::new(page),
        api,
        notifier,
        view: Rc::new(RefCell::new(None)),
    };

    // 3. The signup form lives as long as the page does.
    handlers::wire_signup(&ctx)?.forget();

    // 4. First paint comes from the server.
    spawn_local(handlers::refresh_catalog(ctx));
    Ok(())
}
