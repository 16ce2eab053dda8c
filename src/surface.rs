use crate::core::surface::{Composite, DrawSurface, LineCap, RadialGradient};
use crate::core::Rgba;
use crate::dom;
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("no window")]
    MissingWindow,
    #[error("no document")]
    MissingDocument,
    #[error("missing #{0}")]
    MissingCanvas(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("2d context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("canvas returned no 2d context")]
    NoContext,
}

/// `DrawSurface` backed by a canvas 2D context, drawing in CSS pixels.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_document(document: &web::Document, id: &str) -> Result<Self, SurfaceError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::MissingCanvas(id.to_string()))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::ContextUnavailable(format!("{:?}", e)))?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the backing store and reset the transform so drawing stays in
    /// CSS pixels. Returns the CSS size.
    pub fn sync_size(&self) -> (f64, f64) {
        let size = dom::sync_canvas_backing_size(&self.canvas);
        let dpr = dom::device_pixel_ratio();
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        size
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn dot(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(match cap {
            LineCap::Round => "round",
        });
    }

    fn fill_radial_gradient(&mut self, origin: DVec2, size: DVec2, gradient: &RadialGradient) {
        let c = gradient.center;
        let g = match self.ctx.create_radial_gradient(
            c.x,
            c.y,
            gradient.inner_radius,
            c.x,
            c.y,
            gradient.outer_radius,
        ) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[surface] radial gradient rejected: {:?}", e);
                return;
            }
        };
        for stop in &gradient.stops {
            _ = g.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn set_composite(&mut self, mode: Composite) {
        _ = self
            .ctx
            .set_global_composite_operation(match mode {
                Composite::SourceOver => "source-over",
                Composite::Lighter => "lighter",
            });
    }
}
