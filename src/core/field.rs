use super::config::{FieldConfig, RadiusJitter};
use super::constants::*;
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub position: DVec2,
    pub base: DVec2,
    pub angle: f64,
    pub radius: f64,
    pub speed: f64,
}

/// Secondary wobble layered on top of the orbit; depends only on time and index.
#[inline]
pub fn secondary_offset(tick: u64, index: usize, amplitude: f64) -> DVec2 {
    let t = tick as f64;
    let phase = index as f64 * SECONDARY_PHASE_PER_INDEX;
    DVec2::new(
        (t * SECONDARY_RATE_X + phase).cos() * amplitude,
        (t * SECONDARY_RATE_Y + phase).sin() * amplitude,
    )
}

/// Rendered position of a point: anchor + orbit + secondary wobble.
#[inline]
pub fn derive_position(
    base: DVec2,
    angle: f64,
    radius: f64,
    tick: u64,
    index: usize,
    amplitude: f64,
) -> DVec2 {
    base + DVec2::new(angle.cos(), angle.sin()) * radius + secondary_offset(tick, index, amplitude)
}

/// Wrap one anchor component back into `[-margin, extent + margin]`.
#[inline]
pub fn wrap_component(value: f64, extent: f64) -> f64 {
    let mut v = value;
    if v < -WRAP_MARGIN {
        v = extent + WRAP_MARGIN;
    }
    if v > extent + WRAP_MARGIN {
        v = -WRAP_MARGIN;
    }
    v
}

pub struct PointField {
    pub config: FieldConfig,
    points: Vec<Point>,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl PointField {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            points: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the point set with `count` fresh points scattered over the viewport.
    pub fn initialize(&mut self, count: usize, viewport_width: f64, viewport_height: f64) {
        self.width = viewport_width.max(0.0);
        self.height = viewport_height.max(0.0);
        let (w, h) = (self.width, self.height);
        let cfg = &self.config;
        let rng = &mut self.rng;
        self.points = (0..count)
            .map(|_| Point {
                position: DVec2::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h),
                base: DVec2::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h),
                angle: rng.gen::<f64>() * TAU,
                radius: cfg.radius_min + rng.gen::<f64>() * cfg.radius_span,
                speed: cfg.speed_min + rng.gen::<f64>() * cfg.speed_span,
            })
            .collect();
    }

    /// Swap in a new configuration. Returns whether it differed from the old one.
    ///
    /// Existing points keep their state until the next `initialize`.
    pub fn reconfigure(&mut self, config: FieldConfig) -> bool {
        if self.config == config {
            return false;
        }
        self.config = config;
        true
    }

    /// Move every point one tick forward.
    pub fn advance(&mut self, tick: u64) {
        let t = tick as f64;
        let amplitude = self.config.secondary_amplitude;
        let jitter = self
            .config
            .radius_jitter
            .filter(|j| j.period > 0 && tick > 0 && tick % j.period == 0);
        let (w, h) = (self.width, self.height);

        for (index, point) in self.points.iter_mut().enumerate() {
            let i = index as f64;
            point.angle += point.speed + (t * ANGLE_JITTER_RATE + i).sin() * ANGLE_JITTER_AMPLITUDE;
            point.base.x += (t * DRIFT_RATE_X + i).sin() * DRIFT_STEP;
            point.base.y += (t * DRIFT_RATE_Y + i).cos() * DRIFT_STEP;

            point.position =
                derive_position(point.base, point.angle, point.radius, tick, index, amplitude);

            point.base.x = wrap_component(point.base.x, w);
            point.base.y = wrap_component(point.base.y, h);

            if let Some(j) = jitter {
                perturb_radius(point, &j, &mut self.rng);
            }
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

fn perturb_radius(point: &mut Point, jitter: &RadiusJitter, rng: &mut StdRng) {
    let delta = (rng.gen::<f64>() * 2.0 - 1.0) * jitter.amplitude;
    point.radius = (point.radius + delta).clamp(jitter.min, jitter.max);
}
