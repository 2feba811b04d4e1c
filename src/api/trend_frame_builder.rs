use crate::core::CoordinateProjector;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, MarkerId, PolylinePrimitive, RenderFrame, Renderer};

use super::PredictionTrendChart;
use super::axis_scene_builder::{AxisSceneContext, append_axis_scene};
use super::axis_ticks::AxisTickMode;
use super::tooltip_scene_builder::append_tooltip_overlay;

impl<R: Renderer> PredictionTrendChart<R> {
    /// Materializes the frame for every record received so far.
    ///
    /// An empty buffer yields an empty frame; the chart clears its surface
    /// instead of presenting axes without data.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let config = &self.core.config;
        let mut frame = RenderFrame::new(config.viewport);
        let records = self.buffer.records();
        if records.is_empty() {
            return Ok(frame);
        }

        let area = self.core.area;
        let projector = self.projector()?;
        append_axis_scene(
            &mut frame,
            AxisSceneContext {
                area,
                projector,
                config,
                x_mode: AxisTickMode::Ordinal,
            },
        );

        let series_style = config.series_style;
        let centers: Vec<_> = projector
            .project_records(records)
            .into_iter()
            .map(|local| area.to_screen(local))
            .collect();
        frame.polylines.push(PolylinePrimitive::new(
            centers.iter().map(|center| (center.x, center.y)).collect(),
            series_style.trend_line_width_px,
            series_style.trend_line_color,
        ));
        for (index, center) in centers.into_iter().enumerate() {
            let marker = MarkerId(index);
            let (radius, fill) = self
                .core
                .interaction
                .marker_visual(marker, series_style.trend_marker_color);
            frame
                .circles
                .push(CirclePrimitive::new(marker, center.x, center.y, radius, fill));
        }

        append_tooltip_overlay(
            &mut frame,
            &self.core.interaction.tooltip(),
            config.tooltip_style,
        );
        Ok(frame)
    }

    /// Ordinal X over record indices, Y from zero to the peak plus headroom.
    pub fn projector(&self) -> ChartResult<CoordinateProjector> {
        CoordinateProjector::trend_in(
            self.buffer.records(),
            self.core.config.series_style.trend_y_headroom,
            self.core.area,
        )
    }
}
