use crate::core::CoordinateProjector;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Color, MarkerId, RenderFrame, Renderer, SymbolPrimitive};

use super::ClusterScatterChart;
use super::axis_scene_builder::{AxisSceneContext, append_axis_scene};
use super::axis_ticks::AxisTickMode;
use super::tooltip_scene_builder::append_tooltip_overlay;

impl<R: Renderer> ClusterScatterChart<R> {
    /// Materializes the complete frame for the current dataset and hover state.
    ///
    /// Pure with respect to chart state: two calls without an intervening
    /// mutation produce equal frames.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.core.config;
        let area = self.core.area;
        let projector = self.projector()?;
        let mut frame = RenderFrame::new(config.viewport);

        append_axis_scene(
            &mut frame,
            AxisSceneContext {
                area,
                projector,
                config,
                x_mode: AxisTickMode::Continuous,
            },
        );

        let positions = projector.project_points(&self.dataset.points);
        frame.circles.reserve(positions.len());
        for (index, (point, local)) in self.dataset.points.iter().zip(positions).enumerate() {
            let marker = MarkerId(index);
            let center = area.to_screen(local);
            let (radius, fill) = self
                .core
                .interaction
                .marker_visual(marker, Color::category(point.cluster));
            frame
                .circles
                .push(CirclePrimitive::new(marker, center.x, center.y, radius, fill));
        }

        let series_style = config.series_style;
        for centroid in &self.dataset.centroids {
            let center = area.to_screen(projector.project(centroid.x, centroid.y));
            frame.symbols.push(SymbolPrimitive::cross(
                center.x,
                center.y,
                series_style.centroid_size_px2,
                series_style.centroid_color,
            ));
        }

        append_tooltip_overlay(
            &mut frame,
            &self.core.interaction.tooltip(),
            config.tooltip_style,
        );
        Ok(frame)
    }

    /// Scales for the current points; degenerate when the dataset is empty.
    pub fn projector(&self) -> ChartResult<CoordinateProjector> {
        CoordinateProjector::scatter_in(&self.dataset.points, self.core.area)
    }
}
