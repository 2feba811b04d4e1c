use crate::core::{CoordinateProjector, PlotArea};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::ChartConfig;
use super::axis_ticks::{AxisTickMode, axis_ticks, format_tick_label};

const LABEL_GAP_PX: f64 = 3.0;

#[derive(Debug, Clone, Copy)]
pub(super) struct AxisSceneContext<'a> {
    pub area: PlotArea,
    pub projector: CoordinateProjector,
    pub config: &'a ChartConfig,
    pub x_mode: AxisTickMode,
}

/// Appends the bottom X axis and the left Y axis: lines, ticks, tick labels
/// and titles, in surface coordinates.
pub(super) fn append_axis_scene(frame: &mut RenderFrame, ctx: AxisSceneContext<'_>) {
    let style = ctx.config.axis_style;
    let left = ctx.area.margins.left;
    let top = ctx.area.margins.top;
    let right = left + ctx.area.inner_width();
    let bottom = top + ctx.area.inner_height();

    frame.lines.push(LinePrimitive::new(
        left,
        bottom,
        right,
        bottom,
        style.line_width_px,
        style.line_color,
    ));
    let (x_ticks, x_step) = axis_ticks(ctx.projector.x, ctx.config.tick_count, ctx.x_mode);
    for value in x_ticks {
        let x = left + ctx.projector.x.domain_to_pixel(value);
        frame.lines.push(LinePrimitive::new(
            x,
            bottom,
            x,
            bottom + style.tick_length_px,
            style.line_width_px,
            style.line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick_label(value, x_step),
            x,
            bottom + style.tick_length_px + LABEL_GAP_PX,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    frame.lines.push(LinePrimitive::new(
        left,
        top,
        left,
        bottom,
        style.line_width_px,
        style.line_color,
    ));
    let (y_ticks, y_step) = axis_ticks(
        ctx.projector.y,
        ctx.config.tick_count,
        AxisTickMode::Continuous,
    );
    for value in y_ticks {
        let y = top + ctx.projector.y.domain_to_pixel(value);
        frame.lines.push(LinePrimitive::new(
            left - style.tick_length_px,
            y,
            left,
            y,
            style.line_width_px,
            style.line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick_label(value, y_step),
            left - style.tick_length_px - LABEL_GAP_PX,
            y - style.label_font_size_px / 2.0,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Right,
        ));
    }

    if !ctx.config.x_axis_title.is_empty() {
        frame.texts.push(TextPrimitive::new(
            ctx.config.x_axis_title.clone(),
            left + ctx.area.inner_width() / 2.0,
            bottom + style.x_title_offset_px,
            style.title_font_size_px,
            style.title_color,
            TextHAlign::Center,
        ));
    }
    if !ctx.config.y_axis_title.is_empty() {
        frame.texts.push(
            TextPrimitive::new(
                ctx.config.y_axis_title.clone(),
                left - style.y_title_offset_px,
                top + ctx.area.inner_height() / 2.0,
                style.title_font_size_px,
                style.title_color,
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );
    }
}
