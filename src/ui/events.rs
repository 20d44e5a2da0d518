use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

// Owned event registration: dropping it removes the listener and releases
// the closure, so replacing a rendered view tears its handlers down.
pub struct Subscription {
    target: EventTarget,
    kind: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl Subscription {
    pub fn listen(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback: Some(callback),
        })
    }

    // For listeners that live as long as the page (the signup form).
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(callback) = &self.callback {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.kind, callback.as_ref().unchecked_ref());
        }
    }
}
