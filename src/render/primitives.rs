use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Brightness factor of one "darker" shade step.
pub const SHADE_STEP_FACTOR: f64 = 0.7;

/// Ten-color categorical palette used for cluster ids.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let channel = |range: std::ops::Range<usize>, repeat: bool| -> ChartResult<u8> {
            let raw = digits.get(range).ok_or_else(|| invalid_hex(input))?;
            let raw = if repeat { raw.repeat(2) } else { raw.to_owned() };
            u8::from_str_radix(&raw, 16).map_err(|_| invalid_hex(input))
        };

        match digits.len() {
            3 => Ok(Self::from_rgb8(
                channel(0..1, true)?,
                channel(1..2, true)?,
                channel(2..3, true)?,
            )),
            6 => Ok(Self::from_rgb8(
                channel(0..2, false)?,
                channel(2..4, false)?,
                channel(4..6, false)?,
            )),
            _ => Err(invalid_hex(input)),
        }
    }

    /// Palette color for a cluster id; ids beyond the palette wrap around.
    #[must_use]
    pub fn category(index: i32) -> Self {
        CATEGORY10[index.rem_euclid(CATEGORY10.len() as i32) as usize]
    }

    /// Scales RGB by `0.7^steps`, keeping alpha.
    #[must_use]
    pub fn darker(self, steps: f64) -> Self {
        let factor = SHADE_STEP_FACTOR.powf(steps);
        Self::rgba(
            (self.red * factor).clamp(0.0, 1.0),
            (self.green * factor).clamp(0.0, 1.0),
            (self.blue * factor).clamp(0.0, 1.0),
            self.alpha,
        )
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn mix(self, other: Color, t: f64) -> Self {
        if !(t > 0.0) {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        let lerp = |from: f64, to: f64| from + (to - from) * t;
        Self::rgba(
            lerp(self.red, other.red),
            lerp(self.green, other.green),
            lerp(self.blue, other.blue),
            lerp(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn invalid_hex(input: &str) -> ChartError {
    ChartError::InvalidConfig(format!("`{input}` is not a #rgb or #rrggbb color"))
}

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Connected open path through `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (x, y) in &self.points {
            ensure_finite(&[*x, *y], "polyline vertices")?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Index of the data record a hoverable marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub usize);

/// Filled circular data marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub marker: MarkerId,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(marker: MarkerId, cx: f64, cy: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            marker,
            cx,
            cy,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.cx, self.cy], "circle center")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    Cross,
}

/// Fixed glyph centered at `(cx, cy)` whose filled area is about `size` px².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolPrimitive {
    pub kind: SymbolKind,
    pub cx: f64,
    pub cy: f64,
    pub size: f64,
    pub fill_color: Color,
}

impl SymbolPrimitive {
    #[must_use]
    pub const fn cross(cx: f64, cy: f64, size: f64, fill_color: Color) -> Self {
        Self {
            kind: SymbolKind::Cross,
            cx,
            cy,
            size,
            fill_color,
        }
    }

    /// Closed outline in surface coordinates.
    #[must_use]
    pub fn outline(self) -> Vec<(f64, f64)> {
        match self.kind {
            SymbolKind::Cross => {
                // Five unit squares of side 2r make up the plus sign.
                let r = (self.size / 5.0).sqrt() / 2.0;
                [
                    (-3.0, -1.0),
                    (-1.0, -1.0),
                    (-1.0, -3.0),
                    (1.0, -3.0),
                    (1.0, -1.0),
                    (3.0, -1.0),
                    (3.0, 1.0),
                    (1.0, 1.0),
                    (1.0, 3.0),
                    (-1.0, 3.0),
                    (-1.0, 1.0),
                    (-3.0, 1.0),
                ]
                .into_iter()
                .map(|(dx, dy)| (self.cx + dx * r, self.cy + dy * r))
                .collect()
            }
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.cx, self.cy], "symbol center")?;
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidData(
                "symbol size must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Filled rectangle with optional rounded corners and border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x, self.y], "rect origin")?;
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite()
            || self.border_width < 0.0
            || !self.corner_radius.is_finite()
            || self.corner_radius < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect border width and corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `(x, y)` is the anchor of the label's top edge; `rotation_deg` turns the
/// label around that anchor (negative is counter-clockwise on screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y, self.rotation_deg], "text placement")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
