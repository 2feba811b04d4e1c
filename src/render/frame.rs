use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, MarkerId, PolylinePrimitive, RectPrimitive, SymbolPrimitive,
    TextPrimitive,
};

/// Hit area of one hoverable marker as rendered in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerHandle {
    pub id: MarkerId,
    pub center: ScreenPoint,
    pub radius: f64,
}

impl MarkerHandle {
    #[must_use]
    pub fn contains(self, point: ScreenPoint) -> bool {
        self.center.distance_to(point) <= self.radius
    }
}

/// Primitives drawn above everything else (tooltip box and text).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayer {
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl OverlayLayer {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Complete, backend-agnostic description of one chart frame.
///
/// Backends draw a frame in field order: axis lines, polylines, circles,
/// symbols, texts, overlay. Rendering a frame replaces whatever the surface
/// showed before, so frames are never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub symbols: Vec<SymbolPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub overlay: OverlayLayer,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            polylines: Vec::new(),
            circles: Vec::new(),
            symbols: Vec::new(),
            texts: Vec::new(),
            overlay: OverlayLayer::default(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: SymbolPrimitive) -> Self {
        self.symbols.push(symbol);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Hoverable markers in draw order (later entries are on top).
    #[must_use]
    pub fn markers(&self) -> Vec<MarkerHandle> {
        self.circles
            .iter()
            .map(|circle| MarkerHandle {
                id: circle.marker,
                center: ScreenPoint::new(circle.cx, circle.cy),
                radius: circle.radius,
            })
            .collect()
    }

    #[must_use]
    pub fn circle_for(&self, marker: MarkerId) -> Option<&CirclePrimitive> {
        self.circles.iter().find(|circle| circle.marker == marker)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for symbol in &self.symbols {
            symbol.validate()?;
        }
        for text in self.texts.iter().chain(&self.overlay.texts) {
            text.validate()?;
        }
        for rect in &self.overlay.rects {
            rect.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.circles.is_empty()
            && self.symbols.is_empty()
            && self.texts.is_empty()
            && self.overlay.is_empty()
    }
}
