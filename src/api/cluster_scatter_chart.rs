use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ClusterInsight, ClusterInsightTable, DataPoint, ScatterDataset, ScreenPoint};
use crate::error::ChartResult;
use crate::interaction::{HoverTransition, TooltipState};
use crate::render::{Color, MarkerId, RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::chart_core::ChartCore;
use super::tooltip_content::scatter_tooltip_content;
use super::{ChartConfig, RenderReason, RenderStats, RequestTicket, ResponseSequencer};

/// One row of the cluster legend: palette color plus the cluster's insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterLegendEntry {
    pub cluster: i32,
    pub color: Color,
    pub insight: ClusterInsight,
}

/// Cluster scatter chart: vehicles on two PCA components, colored by
/// cluster, with centroid crosses and a hover tooltip.
pub struct ClusterScatterChart<R: Renderer> {
    pub(super) core: ChartCore<R>,
    pub(super) dataset: ScatterDataset,
    insights: ClusterInsightTable,
    sequencer: ResponseSequencer,
}

impl<R: Renderer> ClusterScatterChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let core = ChartCore::new(renderer, config)?;
        debug!(
            width = core.config.viewport.width,
            height = core.config.viewport.height,
            "initialized cluster scatter chart"
        );
        Ok(Self {
            core,
            dataset: ScatterDataset::empty(),
            insights: ClusterInsightTable::builtin(),
            sequencer: ResponseSequencer::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.core.config
    }

    #[must_use]
    pub fn dataset(&self) -> &ScatterDataset {
        &self.dataset
    }

    #[must_use]
    pub fn insights(&self) -> &ClusterInsightTable {
        &self.insights
    }

    pub fn set_insights(&mut self, insights: ClusterInsightTable) {
        self.insights = insights;
    }

    /// Replaces the dataset and redraws once.
    ///
    /// Points or centroids with non-finite coordinates are dropped. Hover and
    /// tooltip are reset since the old markers no longer exist.
    pub fn set_dataset(&mut self, mut dataset: ScatterDataset) -> ChartResult<()> {
        if !self.core.ensure_attached("set_dataset") {
            return Ok(());
        }

        let original_count = dataset.points.len() + dataset.centroids.len();
        let dropped = dataset.retain_finite();
        if dropped > 0 {
            warn!(original_count, dropped, "dropped non-finite scatter entries");
        }
        debug!(
            points = dataset.points.len(),
            centroids = dataset.centroids.len(),
            "set scatter dataset"
        );

        self.core.interaction.reset();
        self.dataset = dataset;
        self.redraw(RenderReason::DataChanged)
    }

    /// Starts tracking a new cluster-graph request.
    pub fn issue_request(&mut self) -> RequestTicket {
        self.sequencer.issue()
    }

    /// Applies a fetched dataset unless a newer request was already applied.
    ///
    /// Returns `true` when the dataset replaced the current one.
    pub fn apply_response(
        &mut self,
        ticket: RequestTicket,
        dataset: ScatterDataset,
    ) -> ChartResult<bool> {
        if !self.core.ensure_attached("apply_response") {
            return Ok(false);
        }
        if !self.sequencer.accept(ticket) {
            return Ok(false);
        }
        self.set_dataset(dataset)?;
        Ok(true)
    }

    /// Like [`Self::apply_response`], with fetch failures shown as an empty
    /// chart.
    pub fn apply_fetch_result<E: Display>(
        &mut self,
        ticket: RequestTicket,
        result: Result<ScatterDataset, E>,
    ) -> ChartResult<bool> {
        self.apply_response(ticket, ScatterDataset::from_fetch_result(result))
    }

    /// Rebuilds and presents the current frame.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.core.ensure_attached("render") {
            return Ok(());
        }
        self.redraw(RenderReason::Requested)
    }

    /// Feeds a pointer position in surface coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<HoverTransition> {
        if !self.core.ensure_attached("pointer_move") {
            return Ok(HoverTransition::Unchanged);
        }

        let markers = self.core.markers();
        let points = &self.dataset.points;
        let transition = self.core.interaction.pointer_move(
            ScreenPoint::new(x, y),
            &markers,
            |marker| {
                points
                    .get(marker.0)
                    .map(scatter_tooltip_content)
                    .unwrap_or_default()
            },
        );
        if transition != HoverTransition::Unchanged {
            self.redraw(RenderReason::Interaction)?;
        }
        Ok(transition)
    }

    /// Pointer left the chart surface.
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

    /// Advances emphasis transitions by `delta_seconds`, redrawing when a
    /// marker's look changed. Returns whether a redraw happened.
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
    pub fn hovered_point(&self) -> Option<&DataPoint> {
        self.hovered_marker()
            .and_then(|marker| self.dataset.points.get(marker.0))
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

    /// Frame currently shown on the surface.
    #[must_use]
    pub fn current_frame(&self) -> Option<&RenderFrame> {
        self.core.frame.as_ref()
    }

    /// Clusters known to the insight table, with their palette color.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<ClusterLegendEntry> {
        self.insights
            .iter()
            .map(|(cluster, insight)| ClusterLegendEntry {
                cluster,
                color: Color::category(cluster),
                insight: insight.clone(),
            })
            .collect()
    }

    /// Detaches the chart: drops the tooltip overlay and ignores further
    /// events. The surface keeps its last frame.
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

    fn redraw(&mut self, reason: RenderReason) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.core.present(frame, reason)
    }
}
