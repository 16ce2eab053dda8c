use crate::core::{
    ConnectionRenderer, Debouncer, FieldConfig, FrameScheduler, PointField, PointerState, Startup,
    Variant,
};
use crate::dom;
use crate::surface::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: PointField,
    pub renderer: ConnectionRenderer,
    pub scheduler: FrameScheduler<i32>,
    pub surface: CanvasSurface,
    pub pointer: Rc<RefCell<PointerState>>,
    pub resize: Debouncer<i32>,
    pub variant: Variant,
}

pub type SharedFrame = Rc<RefCell<FrameContext>>;
pub type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

impl FrameContext {
    pub fn frame(&mut self) -> bool {
        let pointer = *self.pointer.borrow();
        self.scheduler
            .tick(&mut self.field, &self.renderer, &mut self.surface, &pointer)
    }

    pub fn render_static(&mut self) {
        let pointer = *self.pointer.borrow();
        self.scheduler
            .render_static(&mut self.field, &self.renderer, &mut self.surface, &pointer);
    }

    /// Rebuild the point set for the canvas' current size.
    ///
    /// The device preset is re-evaluated, so crossing the mobile breakpoint
    /// changes the point count and link limits.
    pub fn reinitialize(&mut self) {
        let (w, h) = self.surface.sync_size();
        let constrained = dom::is_constrained_device();
        let config = FieldConfig::for_device(constrained).with_variant(self.variant);
        if self.field.reconfigure(config.clone()) {
            log::info!(
                "[field] constrained={} points={}",
                constrained,
                config.point_count
            );
            self.renderer.set_config(config);
        }
        let count = self.field.config.point_count;
        self.field.initialize(count, w, h);
        log::debug!(
            "[field] reinitialized {} points for {:.0}x{:.0} at t={}",
            count,
            w,
            h,
            self.scheduler.time()
        );
    }
}

/// Build the frame callback and kick off the loop (or the single static frame).
pub fn start_loop(ctx: SharedFrame) -> TickClosure {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut c = ctx_tick.borrow_mut();
        c.scheduler.frame_fired();
        if c.frame() {
            request_frame(&mut c, &tick_clone);
        }
    }) as Box<dyn FnMut()>));

    let startup = ctx.borrow_mut().scheduler.start();
    match startup {
        Startup::Animate => request_frame(&mut ctx.borrow_mut(), &tick),
        Startup::StaticFrame => {
            log::info!("[frame] reduced motion: rendering a single static frame");
            ctx.borrow_mut().render_static();
        }
    }
    tick
}

/// Request the next frame unless one is already outstanding or the loop is paused.
pub fn request_frame(ctx: &mut FrameContext, tick: &TickClosure) {
    if !ctx.scheduler.wants_frame() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    let tick_ref = tick.borrow();
    let Some(cb) = tick_ref.as_ref() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => ctx.scheduler.arm(id),
        Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}

pub fn cancel_frame(id: i32) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(id);
    }
}
