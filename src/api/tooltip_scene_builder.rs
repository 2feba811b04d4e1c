use crate::core::Viewport;
use crate::interaction::TooltipState;
use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::TooltipStyle;

/// Appends the tooltip box to the overlay layer when it is visible.
///
/// The box is anchored at the tooltip position and pushed back inside the
/// viewport when it would overflow the right or bottom edge.
pub(super) fn append_tooltip_overlay(
    frame: &mut RenderFrame,
    tooltip: &TooltipState,
    style: TooltipStyle,
) {
    if !tooltip.visible || tooltip.content.is_empty() {
        return;
    }

    let lines: Vec<&str> = tooltip.content.lines().collect();
    let widest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = widest as f64 * style.char_width_px + 2.0 * style.padding_px;
    let height = lines.len() as f64 * style.line_height_px + 2.0 * style.padding_px;
    let (x, y) = clamp_into_viewport(
        tooltip.screen_x,
        tooltip.screen_y,
        width,
        height,
        frame.viewport,
    );

    frame.overlay.rects.push(
        RectPrimitive::new(x, y, width, height, style.background)
            .with_corner_radius(style.corner_radius_px),
    );
    for (row, line) in lines.into_iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        frame.overlay.texts.push(TextPrimitive::new(
            line,
            x + style.padding_px,
            y + style.padding_px + row as f64 * style.line_height_px,
            style.font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
}

fn clamp_into_viewport(x: f64, y: f64, width: f64, height: f64, viewport: Viewport) -> (f64, f64) {
    let max_x = (f64::from(viewport.width) - width).max(0.0);
    let max_y = (f64::from(viewport.height) - height).max(0.0);
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}
