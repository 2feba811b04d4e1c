use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and server-side frame inspection.
///
/// It validates every frame and keeps the most recent one as its "surface",
/// so callers can inspect exactly what a real backend would have shown.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_symbol_count: usize,
    pub last_text_count: usize,
    surface: Option<RenderFrame>,
}

impl NullRenderer {
    /// Frame currently on the surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&RenderFrame> {
        self.surface.as_ref()
    }

    /// `true` when nothing is drawn (never rendered, or cleared).
    #[must_use]
    pub fn surface_is_blank(&self) -> bool {
        self.surface.as_ref().is_none_or(RenderFrame::is_empty)
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_circle_count = frame.circles.len();
        self.last_symbol_count = frame.symbols.len();
        self.last_text_count = frame.texts.len();
        self.surface = Some(frame.clone());
        Ok(())
    }
}
