use crate::core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client coordinates to canvas-local CSS pixels.
#[inline]
pub fn canvas_local(client_x: f64, client_y: f64, rect: &web::DomRect) -> PointerState {
    PointerState::new(client_x - rect.left(), client_y - rect.top())
}

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let Some(document) = crate::dom::window_document() else {
        return;
    };
    wire_mousemove(&document, canvas, pointer.clone());
    wire_touch(&document, canvas, pointer);
}

fn wire_mousemove(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = canvas.get_bounding_client_rect();
        *pointer.borrow_mut() = canvas_local(ev.client_x() as f64, ev.client_y() as f64, &rect);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Single-touch tracking: the first active touch drives the pointer.
fn wire_touch(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        *pointer.borrow_mut() =
            canvas_local(touch.client_x() as f64, touch.client_y() as f64, &rect);
    }) as Box<dyn FnMut(_)>);
    for name in ["touchstart", "touchmove"] {
        _ = document.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
