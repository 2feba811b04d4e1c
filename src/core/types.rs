use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Inner plotting rectangle: the viewport minus its margins.
///
/// Scales map into plot-local pixels; `to_screen` applies the margin
/// translation so frames and hit tests work in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl PlotArea {
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate()?;
        let area = Self { viewport, margins };
        if area.inner_width() <= 0.0 || area.inner_height() <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "margins leave no plot area inside {}x{} viewport",
                viewport.width, viewport.height
            )));
        }
        Ok(area)
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }

    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (0.0, self.inner_width())
    }

    /// Y pixel range, bottom first so larger values render higher.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.inner_height(), 0.0)
    }

    #[must_use]
    pub fn to_screen(self, local: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(local.x + self.margins.left, local.y + self.margins.top)
    }
}

/// Pixel position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: ScreenPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Margins, PlotArea, ScreenPoint, Viewport};

    #[test]
    fn plot_area_subtracts_margins() {
        let area = PlotArea::new(Viewport::new(800, 600), Margins::new(20.0, 30.0, 50.0, 50.0))
            .expect("valid area");
        assert_eq!(area.inner_width(), 720.0);
        assert_eq!(area.inner_height(), 530.0);
        assert_eq!(area.y_range(), (530.0, 0.0));
        assert_eq!(
            area.to_screen(ScreenPoint::new(0.0, 0.0)),
            ScreenPoint::new(50.0, 20.0)
        );
    }

    #[test]
    fn plot_area_rejects_margins_wider_than_viewport() {
        let result = PlotArea::new(Viewport::new(60, 60), Margins::new(10.0, 40.0, 10.0, 40.0));
        assert!(result.is_err());
    }
}
