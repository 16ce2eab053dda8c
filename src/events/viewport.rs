use crate::core::Visibility;
use crate::dom;
use crate::frame::{self, SharedFrame, TickClosure};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reinitialize the field once resize events have been quiet for the debounce window.
pub fn wire_resize(ctx: SharedFrame) {
    let Some(window) = web::window() else {
        return;
    };

    let ctx_fire = ctx.clone();
    let on_quiet = Closure::wrap(Box::new(move || {
        let mut c = ctx_fire.borrow_mut();
        c.resize.fire();
        c.reinitialize();
        if c.scheduler.is_static() {
            c.render_static();
        }
    }) as Box<dyn FnMut()>);

    let on_resize = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let mut c = ctx.borrow_mut();
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_quiet.as_ref().unchecked_ref(),
            c.resize.delay_ms,
        ) {
            Ok(id) => {
                if let Some(prev) = c.resize.replace(id) {
                    w.clear_timeout_with_handle(prev);
                }
            }
            Err(e) => log::warn!("[resize] setTimeout failed: {:?}", e),
        }
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

/// Pause while the page is hidden; resume from the same time when it is shown.
pub fn wire_visibility(ctx: SharedFrame, tick: TickClosure) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let visible = dom::page_visible();
        let mut c = ctx.borrow_mut();
        match c.scheduler.set_visible(visible) {
            Visibility::Cancel(pending) => {
                if let Some(id) = pending {
                    frame::cancel_frame(id);
                }
                log::debug!("[frame] paused at t={}", c.scheduler.time());
            }
            Visibility::Resume => {
                log::debug!("[frame] resumed at t={}", c.scheduler.time());
                frame::request_frame(&mut c, &tick);
            }
            Visibility::Unchanged => {}
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
