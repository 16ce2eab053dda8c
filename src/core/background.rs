use super::config::{Background, FieldConfig};
use super::pointer::PointerState;
use super::surface::{Composite, DrawSurface, RadialGradient};
use glam::DVec2;

/// Center of the glow: viewport center pulled toward the pointer by `bias`.
///
/// A pointer that has not produced finite coordinates yet leaves the center alone.
pub fn glow_center(size: DVec2, pointer: &PointerState, bias: f64) -> DVec2 {
    let center = size * 0.5;
    if !pointer.is_finite() || !bias.is_finite() {
        return center;
    }
    center + (pointer.position() - center) * bias.clamp(0.0, 1.0)
}

/// Clear the whole surface for a new frame.
pub fn paint_background<S: DrawSurface>(
    config: &FieldConfig,
    width: f64,
    height: f64,
    pointer: &PointerState,
    surface: &mut S,
) {
    let size = DVec2::new(width, height);
    surface.fill_rect(DVec2::ZERO, size, config.palette.background);

    if let Background::Glow {
        pointer_bias,
        radius_factor,
    } = config.background
    {
        let gradient = RadialGradient {
            center: glow_center(size, pointer, pointer_bias),
            inner_radius: 0.0,
            outer_radius: (width.max(height) * radius_factor).max(1.0),
            stops: config.palette.glow.clone(),
        };
        surface.set_composite(Composite::Lighter);
        surface.fill_radial_gradient(DVec2::ZERO, size, &gradient);
        surface.set_composite(Composite::SourceOver);
    }
}
