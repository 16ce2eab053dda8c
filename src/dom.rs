use crate::constants::{COARSE_POINTER_QUERY, MOBILE_BREAKPOINT_PX, REDUCED_MOTION_QUERY};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0)
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
///
/// Returns the CSS size, which is the coordinate space everything is drawn in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let (css_w, css_h) = (rect.width(), rect.height());
    let w_px = (css_w * dpr) as u32;
    let h_px = (css_h * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (css_w, css_h)
}

#[inline]
pub fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches(REDUCED_MOTION_QUERY)
}

/// Touch-first or narrow viewport.
pub fn is_constrained_device() -> bool {
    let narrow = web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w < MOBILE_BREAKPOINT_PX)
        .unwrap_or(false);
    narrow || media_matches(COARSE_POINTER_QUERY)
}

#[inline]
pub fn page_visible() -> bool {
    window_document().map(|d| !d.hidden()).unwrap_or(true)
}
