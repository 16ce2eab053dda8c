#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, RESIZE_DEBOUNCE_MS, VARIANT_ATTR};
use crate::core::{
    ConnectionRenderer, Debouncer, FieldConfig, FrameScheduler, PointField, PointerState, Variant,
};
use crate::surface::{CanvasSurface, SurfaceError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("netfield starting");

    if let Err(e) = init() {
        log::error!("point field disabled: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or(SurfaceError::MissingWindow)?;
    let document = window.document().ok_or(SurfaceError::MissingDocument)?;
    let surface = CanvasSurface::from_document(&document, CANVAS_ID)?;

    let constrained = dom::is_constrained_device();
    let variant = surface
        .canvas()
        .get_attribute(VARIANT_ATTR)
        .and_then(|v| Variant::from_attr(&v))
        .unwrap_or_default();
    let config = FieldConfig::for_device(constrained).with_variant(variant);
    let reduced_motion = dom::prefers_reduced_motion();
    log::info!(
        "[field] variant={:?} constrained={} points={} reduced_motion={}",
        variant,
        constrained,
        config.point_count,
        reduced_motion
    );

    let (w, h) = surface.sync_size();
    let mut field = PointField::new(config.clone(), rand::random());
    field.initialize(config.point_count, w, h);

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_handlers(surface.canvas(), pointer.clone());

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        renderer: ConnectionRenderer::new(config),
        scheduler: FrameScheduler::new(reduced_motion),
        surface,
        pointer,
        resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
        variant,
    }));

    events::wire_resize(ctx.clone());
    let tick = frame::start_loop(ctx.clone());
    events::wire_visibility(ctx, tick);
    Ok(())
}
