use std::cell::RefCell;

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

const HIDE_AFTER_MS: i32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

// One transient message area, latest message wins. Showing a new message
// cancels the pending hide so the replacement gets the full five seconds.
pub struct Notifier {
    window: Window,
    element: Element,
    timer: RefCell<Option<PendingHide>>,
}

struct PendingHide {
    handle: i32,
    // Keeps the scheduled callback alive until it fires or is replaced.
    _callback: Closure<dyn FnMut()>,
}

impl Notifier {
    pub fn new(window: Window, element: Element) -> Self {
        Self {
            window,
            element,
            timer: RefCell::new(None),
        }
    }

    pub fn show(&self, text: &str, kind: NoticeKind) {
        if let Some(pending) = self.timer.borrow_mut().take() {
            self.window.clear_timeout_with_handle(pending.handle);
        }

        self.element.set_text_content(Some(text));
        self.element.set_class_name(kind.class());

        let element = self.element.clone();
        let hide_class = format!("{} hidden", kind.class());
        let callback = Closure::wrap(Box::new(move || {
            element.set_class_name(&hide_class);
        }) as Box<dyn FnMut()>);

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                HIDE_AFTER_MS,
            ) {
            Ok(handle) => {
                *self.timer.borrow_mut() = Some(PendingHide {
                    handle,
                    _callback: callback,
                });
            }
            Err(err) => warn!("Could not schedule message dismissal: {:?}", err),
        }
    }
}
