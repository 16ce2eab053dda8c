use super::color::Palette;
use super::constants::*;

/// Visual variant of the background, selected by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Pointer edges only on a solid background.
    #[default]
    Classic,
    /// Adds the ambient mesh, peer edges and orbit radius jitter.
    Rich,
    /// Pointer edges over a pointer-biased radial glow.
    Glow,
}

impl Variant {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "rich" => Some(Variant::Rich),
            "glow" => Some(Variant::Glow),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeerLinks {
    pub per_point: usize,
    pub radius: f64,
    pub opacity_floor: f64,
    pub opacity_scale: f64,
}

impl Default for PeerLinks {
    fn default() -> Self {
        Self {
            per_point: PEER_LINKS_PER_POINT,
            radius: PEER_RADIUS,
            opacity_floor: PEER_OPACITY_FLOOR,
            opacity_scale: PEER_OPACITY_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientMesh {
    pub threshold_base: f64,
    pub threshold_swing: f64,
    pub threshold_rate: f64,
    pub opacity_floor: f64,
    pub opacity_scale: f64,
}

impl Default for AmbientMesh {
    fn default() -> Self {
        Self {
            threshold_base: MESH_THRESHOLD_BASE,
            threshold_swing: MESH_THRESHOLD_SWING,
            threshold_rate: MESH_THRESHOLD_RATE,
            opacity_floor: MESH_OPACITY_FLOOR,
            opacity_scale: MESH_OPACITY_SCALE,
        }
    }
}

impl AmbientMesh {
    /// Connection distance for the pair `(i, j)` at `tick`.
    #[inline]
    pub fn threshold(&self, tick: u64, i: usize, j: usize) -> f64 {
        self.threshold_base
            + (tick as f64 * self.threshold_rate + i as f64 + j as f64).sin()
                * self.threshold_swing
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusJitter {
    pub period: u64,
    pub amplitude: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for RadiusJitter {
    fn default() -> Self {
        Self {
            period: RADIUS_JITTER_PERIOD,
            amplitude: RADIUS_JITTER_AMPLITUDE,
            min: RADIUS_CLAMP_MIN,
            max: RADIUS_CLAMP_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Background {
    #[default]
    Solid,
    Glow {
        pointer_bias: f64,
        radius_factor: f64,
    },
}

/// Everything that used to differ between the per-device copies of the
/// animation, as one record.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub point_count: usize,
    pub radius_min: f64,
    pub radius_span: f64,
    pub speed_min: f64,
    pub speed_span: f64,
    pub secondary_amplitude: f64,

    pub pointer_links: usize,
    pub max_pointer_distance: f64,
    pub pointer_opacity_floor: f64,
    pub line_alpha: f64,
    pub dot_alpha: f64,
    pub marker_alpha: f64,

    pub line_width: f64,
    pub dot_radius: f64,
    pub marker_radius: f64,

    pub peers: Option<PeerLinks>,
    pub mesh: Option<AmbientMesh>,
    pub radius_jitter: Option<RadiusJitter>,
    pub background: Background,
    pub palette: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl FieldConfig {
    pub fn desktop() -> Self {
        Self {
            point_count: DESKTOP_POINT_COUNT,
            radius_min: ORBIT_RADIUS_MIN,
            radius_span: ORBIT_RADIUS_SPAN,
            speed_min: ANGULAR_SPEED_MIN,
            speed_span: ANGULAR_SPEED_SPAN,
            secondary_amplitude: SECONDARY_AMPLITUDE,
            pointer_links: DESKTOP_POINTER_LINKS,
            max_pointer_distance: DESKTOP_MAX_POINTER_DISTANCE,
            pointer_opacity_floor: POINTER_OPACITY_FLOOR,
            line_alpha: POINTER_LINE_ALPHA,
            dot_alpha: POINTER_DOT_ALPHA,
            marker_alpha: POINTER_MARKER_ALPHA,
            line_width: DESKTOP_LINE_WIDTH,
            dot_radius: DOT_RADIUS,
            marker_radius: POINTER_MARKER_RADIUS,
            peers: None,
            mesh: None,
            radius_jitter: None,
            background: Background::Solid,
            palette: Palette::default(),
        }
    }

    /// Fewer points and links for touch devices and narrow viewports.
    pub fn constrained() -> Self {
        Self {
            point_count: CONSTRAINED_POINT_COUNT,
            secondary_amplitude: CONSTRAINED_SECONDARY_AMPLITUDE,
            pointer_links: CONSTRAINED_POINTER_LINKS,
            max_pointer_distance: CONSTRAINED_MAX_POINTER_DISTANCE,
            line_width: CONSTRAINED_LINE_WIDTH,
            ..Self::desktop()
        }
    }

    pub fn for_device(constrained: bool) -> Self {
        if constrained {
            Self::constrained()
        } else {
            Self::desktop()
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        match variant {
            Variant::Classic => {}
            Variant::Rich => {
                self.peers = Some(PeerLinks::default());
                self.mesh = Some(AmbientMesh::default());
                self.radius_jitter = Some(RadiusJitter::default());
            }
            Variant::Glow => {
                self.radius_jitter = Some(RadiusJitter::default());
                self.background = Background::Glow {
                    pointer_bias: GLOW_POINTER_BIAS,
                    radius_factor: GLOW_RADIUS_FACTOR,
                };
            }
        }
        self
    }
}
