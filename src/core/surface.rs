use super::color::{ColorStop, Rgba};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

/// Compositing modes used by the background painter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    Lighter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Vec<ColorStop>,
}

/// Drawing primitives the renderer needs from a 2D surface.
///
/// The browser implementation wraps `CanvasRenderingContext2d`; the
/// `Vec<DrawCommand>` implementation records calls so frames can be
/// inspected on the host.
pub trait DrawSurface {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba);
    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba);
    fn dot(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn set_line_cap(&mut self, cap: LineCap);
    fn fill_radial_gradient(&mut self, origin: DVec2, size: DVec2, gradient: &RadialGradient);
    fn set_composite(&mut self, mode: Composite);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: DVec2,
        size: DVec2,
        color: Rgba,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgba,
    },
    Dot {
        center: DVec2,
        radius: f64,
        color: Rgba,
    },
    LineCap(LineCap),
    RadialGradient {
        origin: DVec2,
        size: DVec2,
        gradient: RadialGradient,
    },
    Composite(Composite),
}

impl DrawCommand {
    /// Alpha of the color this command paints with, if any.
    pub fn alpha(&self) -> Option<f64> {
        match self {
            DrawCommand::FillRect { color, .. }
            | DrawCommand::Line { color, .. }
            | DrawCommand::Dot { color, .. } => Some(color.a),
            _ => None,
        }
    }
}

impl DrawSurface for Vec<DrawCommand> {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba) {
        self.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        self.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn dot(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.push(DrawCommand::Dot {
            center,
            radius,
            color,
        });
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.push(DrawCommand::LineCap(cap));
    }

    fn fill_radial_gradient(&mut self, origin: DVec2, size: DVec2, gradient: &RadialGradient) {
        self.push(DrawCommand::RadialGradient {
            origin,
            size,
            gradient: gradient.clone(),
        });
    }

    fn set_composite(&mut self, mode: Composite) {
        self.push(DrawCommand::Composite(mode));
    }
}
