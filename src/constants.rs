// Page integration constants for the browser front-end.

// DOM hooks
pub const CANVAS_ID: &str = "canvas";
pub const VARIANT_ATTR: &str = "data-variant";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Viewports narrower than this (CSS px) get the constrained preset
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Resize events are coalesced until this long without a new one
pub const RESIZE_DEBOUNCE_MS: i32 = 250;
