// Shared host-side harness.
// The main crate is wasm-only, so we include the pure-Rust core modules directly.

#![allow(dead_code)]

pub mod core {
    pub mod background {
        include!("../../src/core/background.rs");
    }
    pub mod color {
        include!("../../src/core/color.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod connections {
        include!("../../src/core/connections.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod debounce {
        include!("../../src/core/debounce.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
    pub mod pointer {
        include!("../../src/core/pointer.rs");
    }
    pub mod scheduler {
        include!("../../src/core/scheduler.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
}

use self::core::field::Point;
use glam::DVec2;

/// A stationary point at `(x, y)`.
pub fn point_at(x: f64, y: f64) -> Point {
    Point {
        position: DVec2::new(x, y),
        base: DVec2::new(x, y),
        angle: 0.0,
        radius: 0.0,
        speed: 0.0,
    }
}
