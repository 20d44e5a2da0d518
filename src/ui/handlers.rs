use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, Window};

use crate::api::ApiClient;
use crate::services::catalog_service;
use crate::ui::events::Subscription;
use crate::ui::notify::{NoticeKind, Notifier};
use crate::ui::page::Page;
use crate::ui::render::{self, RenderedView};

// Everything a flow needs, cloned into its closures. The rendered view
// is shared so a signup refresh can replace the previous render's
// handlers.
#[derive(Clone)]
pub struct AppContext {
    pub window: Window,
    pub page: Rc<Page>,
    pub api: ApiClient,
    pub notifier: Rc<Notifier>,
    pub view: Rc<RefCell<Option<RenderedView>>>,
}

// The DOM a confirmed unregister patches. Held by value in the click
// handler; a concurrent full refresh just leaves these nodes detached.
#[derive(Clone)]
pub struct UnregisterTarget {
    pub activity: String,
    pub email: String,
    pub max_participants: u32,
    pub entry: Element,
    pub list: Element,
    pub spots: Element,
}

pub fn wire_signup(ctx: &AppContext) -> Result<Subscription, JsValue> {
    let form = ctx.page.form.clone();
    let ctx = ctx.clone();
    Subscription::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let email = ctx.page.email.value();
        let activity = ctx.page.select.value();
        spawn_local(submit_signup(ctx.clone(), activity, email));
    })
}

async fn submit_signup(ctx: AppContext, activity: String, email: String) {
    match ctx.api.signup(&activity, &email).await {
        Ok(message) => {
            ctx.page.form.reset();
            ctx.notifier.show(&message, NoticeKind::Success);
            // The new participant and updated capacity must show up
            // everywhere, so signup success always goes through a full
            // refresh.
            refresh_catalog(ctx).await;
        }
        Err(err) => {
            // Rendered state stays untouched on failure.
            warn!("Signup rejected for {}: {}", activity, err);
            ctx.notifier.show(&err.to_string(), NoticeKind::Error);
        }
    }
}

pub async fn refresh_catalog(ctx: AppContext) {
    match ctx.api.fetch_catalog().await {
        Ok(catalog) => {
            let cards = catalog_service::build_activity_cards(&catalog);
            match render::clear_and_render(&ctx, &cards) {
                Ok(view) => *ctx.view.borrow_mut() = Some(view),
                Err(err) => warn!("Activities render failed: {:?}", err),
            }
        }
        Err(err) => {
            warn!("📡 Activities fetch failed: {}", err);
            *ctx.view.borrow_mut() = None;
            if let Err(render_err) = render::render_fetch_failure(&ctx.page) {
                warn!("Fallback render failed: {:?}", render_err);
            }
        }
    }
}

pub fn unregister_click(ctx: AppContext, target: UnregisterTarget) -> impl FnMut(Event) {
    move |_event: Event| {
        let prompt = format!("Remove {} from \"{}\"?", target.email, target.activity);
        if !ctx.window.confirm_with_message(&prompt).unwrap_or(false) {
            // Declined: back to idle, nothing touched.
            return;
        }

        let ctx = ctx.clone();
        let target = target.clone();
        spawn_local(async move {
            match ctx.api.unregister(&target.activity, &target.email).await {
                Ok(message) => {
                    if let Err(err) = render::remove_participant_entry(&ctx.page.document, &target)
                    {
                        warn!("Participant removal patch failed: {:?}", err);
                    }
                    ctx.notifier.show(&message, NoticeKind::Success);
                }
                Err(err) => {
                    // Nothing was removed locally, so there is nothing to
                    // restore; just surface the reason.
                    warn!("Unregister rejected for {}: {}", target.activity, err);
                    ctx.notifier.show(&err.to_string(), NoticeKind::Error);
                }
            }
        });
    }
}
