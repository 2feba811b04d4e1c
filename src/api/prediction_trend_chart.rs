use tracing::debug;

use crate::core::{BufferSignal, PredictionInputs, ScreenPoint, TrendBuffer, TrendRecord};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverTransition, TooltipState};
use crate::render::{MarkerId, RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::chart_core::ChartCore;
use super::tooltip_content::trend_tooltip_content;
use super::{ChartConfig, PredictionResponse, RenderReason, RenderStats};

/// Prediction trend chart: one point per prediction in arrival order,
/// joined by a line.
pub struct PredictionTrendChart<R: Renderer> {
    pub(super) core: ChartCore<R>,
    pub(super) buffer: TrendBuffer,
}

impl<R: Renderer> PredictionTrendChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let core = ChartCore::new(renderer, config)?;
        debug!(
            width = core.config.viewport.width,
            height = core.config.viewport.height,
            "initialized prediction trend chart"
        );
        Ok(Self {
            core,
            buffer: TrendBuffer::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.core.config
    }

    #[must_use]
    pub fn records(&self) -> &[TrendRecord] {
        self.buffer.records()
    }

    /// Appends one prediction and redraws the whole sequence once.
    pub fn push_prediction(&mut self, record: TrendRecord) -> ChartResult<()> {
        if !self.core.ensure_attached("push_prediction") {
            return Ok(());
        }
        if !record.value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "prediction value must be finite, got {}",
                record.value
            )));
        }

        let signal = self.buffer.append(record);
        self.apply_signal(signal)
    }

    /// Folds a service response with the inputs that produced it.
    pub fn record_prediction(
        &mut self,
        inputs: &PredictionInputs,
        response: PredictionResponse,
    ) -> ChartResult<()> {
        self.push_prediction(response.into_record(inputs))
    }

    /// Drops every record and blanks the surface, axes included.
    pub fn reset(&mut self) -> ChartResult<()> {
        if !self.core.ensure_attached("reset") {
            return Ok(());
        }
        let signal = self.buffer.reset();
        self.apply_signal(signal)
    }

    /// Rebuilds and presents the current frame; clears when there is no data.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.core.ensure_attached("render") {
            return Ok(());
        }
        if self.buffer.is_empty() {
            return self.core.clear_surface();
        }
        self.redraw(RenderReason::Requested)
    }

    /// Feeds a pointer position in surface coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<HoverTransition> {
        if !self.core.ensure_attached("pointer_move") {
            return Ok(HoverTransition::Unchanged);
        }

        let markers = self.core.markers();
        let records = self.buffer.records();
        let transition = self.core.interaction.pointer_move(
            ScreenPoint::new(x, y),
            &markers,
            |marker| {
                records
                    .get(marker.0)
                    .map(trend_tooltip_content)
                    .unwrap_or_default()
            },
        );
        if transition != HoverTransition::Unchanged {
            self.redraw(RenderReason::Interaction)?;
        }
        Ok(transition)
    }

    pub fn pointer_leave(&mut self) -> ChartResult<HoverTransition> {
        if !self.core.ensure_attached("pointer_leave") {
            return Ok(HoverTransition::Unchanged);
        }
        let transition = self.core.interaction.pointer_leave();
        if transition != HoverTransition::Unchanged {
            self.redraw(RenderReason::Interaction)?;
        }
        Ok(transition)
    }

    /// Advances emphasis transitions; returns whether a redraw happened.
    pub fn advance_animations(&mut self, delta_seconds: f64) -> ChartResult<bool> {
        if !self.core.ensure_attached("advance_animations") {
            return Ok(false);
        }
        if !self.core.interaction.step(delta_seconds) {
            return Ok(false);
        }
        self.redraw(RenderReason::Animation)?;
        Ok(true)
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.core.interaction.tooltip()
    }

    #[must_use]
    pub fn hovered_marker(&self) -> Option<MarkerId> {
        self.core.interaction.hovered()
    }

    #[must_use]
    pub fn hovered_record(&self) -> Option<&TrendRecord> {
        self.hovered_marker()
            .and_then(|marker| self.buffer.records().get(marker.0))
    }

    #[must_use]
    pub fn emphasis_level(&self, marker: MarkerId) -> f64 {
        self.core.interaction.emphasis_level(marker)
    }

    #[must_use]
    pub fn emphasized_markers(&self) -> Vec<MarkerId> {
        self.core.interaction.emphasized_markers()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.core.interaction.is_animating()
    }

    #[must_use]
    pub fn render_stats(&self) -> RenderStats {
        self.core.stats
    }

    #[must_use]
    pub fn current_frame(&self) -> Option<&RenderFrame> {
        self.core.frame.as_ref()
    }

    pub fn teardown(&mut self) {
        self.core.teardown();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.core.attached
    }

    #[must_use]
    pub fn has_tooltip_overlay(&self) -> bool {
        self.core.interaction.has_overlay()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.core.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.core.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.core.renderer
    }

    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.core.paint_on_cairo_context(context)
    }

    fn apply_signal(&mut self, signal: BufferSignal) -> ChartResult<()> {
        self.core.interaction.reset();
        match signal {
            BufferSignal::Redraw => {
                debug!(records = self.buffer.len(), "appended prediction");
                self.redraw(RenderReason::DataChanged)
            }
            BufferSignal::ClearSurface => self.core.clear_surface(),
        }
    }

    fn redraw(&mut self, reason: RenderReason) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.core.present(frame, reason)
    }
}
