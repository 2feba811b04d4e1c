use tracing::debug;

use crate::core::PlotArea;
use crate::error::ChartResult;
use crate::interaction::InteractionController;
use crate::render::{MarkerHandle, RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{ChartConfig, RenderReason, RenderStats};

/// State shared by both chart kinds: surface, layout, hover and counters.
pub(super) struct ChartCore<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) area: PlotArea,
    pub(super) interaction: InteractionController,
    pub(super) stats: RenderStats,
    /// Frame currently on the surface; `None` before the first render and
    /// after a clear.
    pub(super) frame: Option<RenderFrame>,
    pub(super) attached: bool,
}

impl<R: Renderer> ChartCore<R> {
    pub(super) fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let area = config.validate()?;
        let interaction = InteractionController::new(config.emphasis, config.tooltip_offset);
        Ok(Self {
            renderer,
            config,
            area,
            interaction,
            stats: RenderStats::default(),
            frame: None,
            attached: true,
        })
    }

    /// Returns `false` (and logs) when the chart was torn down.
    pub(super) fn ensure_attached(&self, operation: &'static str) -> bool {
        if !self.attached {
            debug!(operation, "ignoring call on detached chart");
        }
        self.attached
    }

    /// Swaps `frame` onto the surface.
    pub(super) fn present(&mut self, frame: RenderFrame, reason: RenderReason) -> ChartResult<()> {
        self.renderer.render(&frame)?;
        self.stats.record(reason);
        debug!(
            ?reason,
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            symbols = frame.symbols.len(),
            tooltip = !frame.overlay.is_empty(),
            "presented frame"
        );
        self.frame = Some(frame);
        Ok(())
    }

    pub(super) fn clear_surface(&mut self) -> ChartResult<()> {
        self.renderer.clear(self.config.viewport)?;
        self.stats.clears += 1;
        self.frame = None;
        debug!("cleared surface");
        Ok(())
    }

    /// Hit areas of the markers currently on screen.
    pub(super) fn markers(&self) -> Vec<MarkerHandle> {
        self.frame
            .as_ref()
            .map(RenderFrame::markers)
            .unwrap_or_default()
    }

    pub(super) fn teardown(&mut self) {
        if !self.attached {
            return;
        }
        self.interaction.detach();
        self.attached = false;
        debug!(
            redraws = self.stats.total_redraws(),
            clears = self.stats.clears,
            "chart detached"
        );
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn paint_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self
            .frame
            .clone()
            .unwrap_or_else(|| RenderFrame::new(self.config.viewport));
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
