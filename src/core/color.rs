/// Straight-alpha sRGB color; `a` is kept in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with alpha replaced; non-finite alpha maps to fully transparent.
    pub fn with_alpha(self, a: f64) -> Self {
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 };
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Visual palette shared by the renderer and the background painter.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub link: Rgba,
    pub mesh: Rgba,
    pub background: Rgba,
    pub glow: Vec<ColorStop>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            link: Rgba::rgb(66, 153, 225),
            mesh: Rgba::rgb(99, 179, 237),
            background: Rgba::WHITE,
            glow: vec![
                ColorStop::new(0.0, Rgba::rgb(190, 227, 248).with_alpha(0.55)),
                ColorStop::new(0.5, Rgba::rgb(144, 205, 244).with_alpha(0.2)),
                ColorStop::new(1.0, Rgba::rgb(255, 255, 255).with_alpha(0.0)),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f64, color: Rgba) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}
