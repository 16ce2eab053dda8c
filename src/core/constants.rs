// Motion and connection tuning constants for the point field.

// Point generation
pub const DESKTOP_POINT_COUNT: usize = 18;
pub const CONSTRAINED_POINT_COUNT: usize = 12;
pub const ORBIT_RADIUS_MIN: f64 = 30.0;
pub const ORBIT_RADIUS_SPAN: f64 = 80.0;
pub const ANGULAR_SPEED_MIN: f64 = 0.001;
pub const ANGULAR_SPEED_SPAN: f64 = 0.002;

// Per-tick motion (phase rates are per tick, amplitudes in CSS px)
pub const ANGLE_JITTER_RATE: f64 = 0.001;
pub const ANGLE_JITTER_AMPLITUDE: f64 = 0.002;
pub const DRIFT_RATE_X: f64 = 0.0005;
pub const DRIFT_RATE_Y: f64 = 0.0007;
pub const DRIFT_STEP: f64 = 0.3;
pub const SECONDARY_RATE_X: f64 = 0.0004;
pub const SECONDARY_RATE_Y: f64 = 0.0006;
pub const SECONDARY_PHASE_PER_INDEX: f64 = 1.5;
pub const SECONDARY_AMPLITUDE: f64 = 30.0;
pub const CONSTRAINED_SECONDARY_AMPLITUDE: f64 = 15.0;

// Anchors may leave the viewport by this much before wrapping around
pub const WRAP_MARGIN: f64 = 100.0;

// Periodic orbit radius perturbation
pub const RADIUS_JITTER_PERIOD: u64 = 1000; // ticks
pub const RADIUS_JITTER_AMPLITUDE: f64 = 10.0;
pub const RADIUS_CLAMP_MIN: f64 = 20.0;
pub const RADIUS_CLAMP_MAX: f64 = 120.0;

// Pointer edges
pub const DESKTOP_POINTER_LINKS: usize = 6;
pub const CONSTRAINED_POINTER_LINKS: usize = 4;
pub const DESKTOP_MAX_POINTER_DISTANCE: f64 = 700.0;
pub const CONSTRAINED_MAX_POINTER_DISTANCE: f64 = 500.0;
pub const POINTER_OPACITY_FLOOR: f64 = 0.3;
pub const POINTER_LINE_ALPHA: f64 = 0.8;
pub const POINTER_DOT_ALPHA: f64 = 0.9;
pub const POINTER_MARKER_ALPHA: f64 = 0.95;

// Peer edges (rich variant)
pub const PEER_LINKS_PER_POINT: usize = 2;
pub const PEER_RADIUS: f64 = 400.0;
pub const PEER_OPACITY_FLOOR: f64 = 0.15;
pub const PEER_OPACITY_SCALE: f64 = 0.6;

// Ambient mesh (rich variant); threshold = base + sin(tick * rate + i + j) * swing
pub const MESH_THRESHOLD_BASE: f64 = 180.0;
pub const MESH_THRESHOLD_SWING: f64 = 50.0;
pub const MESH_THRESHOLD_RATE: f64 = 0.002;
pub const MESH_OPACITY_FLOOR: f64 = 0.05;
pub const MESH_OPACITY_SCALE: f64 = 0.25;

// Stroke geometry (CSS px)
pub const DESKTOP_LINE_WIDTH: f64 = 1.5;
pub const CONSTRAINED_LINE_WIDTH: f64 = 1.0;
pub const MESH_LINE_WIDTH: f64 = 0.8;
pub const DOT_RADIUS: f64 = 3.0;
pub const PEER_DOT_RADIUS: f64 = 2.0;
pub const POINTER_MARKER_RADIUS: f64 = 4.0;

// Glow background
pub const GLOW_POINTER_BIAS: f64 = 0.25; // fraction of the way toward the pointer
pub const GLOW_RADIUS_FACTOR: f64 = 0.75; // of the larger viewport side
