mod frame;
mod null_renderer;
mod primitives;

pub use frame::{MarkerHandle, OverlayLayer, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CATEGORY10, CirclePrimitive, Color, LinePrimitive, MarkerId, PolylinePrimitive,
    RectPrimitive, SHADE_STEP_FACTOR, SymbolKind, SymbolPrimitive, TextHAlign, TextPrimitive,
};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` and replace whatever
/// the surface showed before; they never merge frames.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Wipes the surface. Defaults to rendering an empty frame.
    fn clear(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.render(&RenderFrame::new(viewport))
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
