//! Hover state machine, tooltip overlay and marker emphasis.
//!
//! Each marker is either idle or hovered; at most one marker is hovered at a
//! time. Emphasis changes are animated by explicit `step` calls so the host
//! owns the clock and input handling never waits on an animation.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::ScreenPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, MarkerHandle, MarkerId};

/// Visual change applied to the hovered marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmphasisStyle {
    pub base_radius_px: f64,
    pub emphasized_radius_px: f64,
    /// Number of darker shade steps applied to the fill at full emphasis.
    pub darken_steps: f64,
    pub transition_seconds: f64,
}

impl Default for EmphasisStyle {
    fn default() -> Self {
        Self {
            base_radius_px: 5.0,
            emphasized_radius_px: 8.0,
            darken_steps: 1.0,
            transition_seconds: 0.2,
        }
    }
}

impl EmphasisStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("base_radius_px", self.base_radius_px),
            ("emphasized_radius_px", self.emphasized_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "emphasis `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("darken_steps", self.darken_steps),
            ("transition_seconds", self.transition_seconds),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "emphasis `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    /// Radius and fill for a marker at emphasis `level` in `[0, 1]`.
    #[must_use]
    pub fn marker_visual(self, base_fill: Color, level: f64) -> (f64, Color) {
        let level = level.clamp(0.0, 1.0);
        let radius =
            self.base_radius_px + (self.emphasized_radius_px - self.base_radius_px) * level;
        let fill = base_fill.mix(base_fill.darker(self.darken_steps), level);
        (radius, fill)
    }
}

/// Floating tooltip as seen by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    pub screen_x: f64,
    pub screen_y: f64,
}

/// Tooltip placement relative to the pointer, chosen so the box never sits
/// under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { dx: 10.0, dy: -20.0 }
    }
}

/// Tooltip resource owned by a single chart instance.
#[derive(Debug, Clone, PartialEq, Default)]
struct TooltipOverlay {
    state: TooltipState,
}

impl TooltipOverlay {
    fn show(&mut self, content: String, anchor: ScreenPoint) {
        self.state.visible = true;
        self.state.content = content;
        self.state.screen_x = anchor.x;
        self.state.screen_y = anchor.y;
    }

    fn move_to(&mut self, anchor: ScreenPoint) {
        self.state.screen_x = anchor.x;
        self.state.screen_y = anchor.y;
    }

    fn hide(&mut self) {
        self.state.visible = false;
        self.state.content.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverPhase {
    Idle,
    Hovered(MarkerId),
}

/// Result of feeding one pointer event into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTransition {
    /// Nothing hovered before or after.
    Unchanged,
    Entered(MarkerId),
    /// Pointer moved within the hovered marker; only the tooltip followed.
    Moved(MarkerId),
    Left(MarkerId),
    Switched { from: MarkerId, to: MarkerId },
}

impl HoverTransition {
    /// `true` when marker emphasis changed and the frame must be rebuilt.
    #[must_use]
    pub fn changes_emphasis(self) -> bool {
        matches!(
            self,
            Self::Entered(_) | Self::Left(_) | Self::Switched { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct EmphasisTransition {
    marker: MarkerId,
    from_level: f64,
    to_level: f64,
    elapsed: f64,
    duration: f64,
}

impl EmphasisTransition {
    fn progress(self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    fn level(self) -> f64 {
        let eased = ease_cubic_in_out(self.progress());
        self.from_level + (self.to_level - self.from_level) * eased
    }

    fn is_finished(self) -> bool {
        self.progress() >= 1.0
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Per-chart hover controller.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    phase: HoverPhase,
    style: EmphasisStyle,
    tooltip_offset: TooltipOffset,
    overlay: Option<TooltipOverlay>,
    transitions: SmallVec<[EmphasisTransition; 2]>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(EmphasisStyle::default(), TooltipOffset::default())
    }
}

impl InteractionController {
    #[must_use]
    pub fn new(style: EmphasisStyle, tooltip_offset: TooltipOffset) -> Self {
        Self {
            phase: HoverPhase::Idle,
            style,
            tooltip_offset,
            overlay: None,
            transitions: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    #[must_use]
    pub fn hovered(&self) -> Option<MarkerId> {
        match self.phase {
            HoverPhase::Idle => None,
            HoverPhase::Hovered(marker) => Some(marker),
        }
    }

    #[must_use]
    pub fn style(&self) -> EmphasisStyle {
        self.style
    }

    /// Current tooltip; hidden when the overlay was never created.
    #[must_use]
    pub fn tooltip(&self) -> TooltipState {
        self.overlay
            .as_ref()
            .map(|overlay| overlay.state.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Picks the marker under `pointer`.
    ///
    /// Overlapping hit areas resolve to the nearest center, then to the marker
    /// drawn last.
    #[must_use]
    pub fn hit_test(markers: &[MarkerHandle], pointer: ScreenPoint) -> Option<MarkerId> {
        let candidates: SmallVec<[(OrderedFloat<f64>, Reverse<usize>, MarkerId); 4]> = markers
            .iter()
            .enumerate()
            .filter(|(_, handle)| handle.contains(pointer))
            .map(|(draw_index, handle)| {
                (
                    OrderedFloat(handle.center.distance_to(pointer)),
                    Reverse(draw_index),
                    handle.id,
                )
            })
            .collect();

        candidates
            .into_iter()
            .min_by_key(|(distance, draw_order, _)| (*distance, *draw_order))
            .map(|(_, _, marker)| marker)
    }

    /// Feeds a pointer position. `content` is asked for tooltip text only when
    /// a marker becomes hovered.
    pub fn pointer_move<F>(
        &mut self,
        pointer: ScreenPoint,
        markers: &[MarkerHandle],
        content: F,
    ) -> HoverTransition
    where
        F: FnOnce(MarkerId) -> String,
    {
        let hit = Self::hit_test(markers, pointer);
        let transition = match (self.phase, hit) {
            (HoverPhase::Idle, None) => HoverTransition::Unchanged,
            (HoverPhase::Idle, Some(marker)) => {
                self.enter(marker, pointer, content(marker));
                HoverTransition::Entered(marker)
            }
            (HoverPhase::Hovered(current), Some(marker)) if current == marker => {
                let anchor = self.tooltip_anchor(pointer);
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.move_to(anchor);
                }
                HoverTransition::Moved(marker)
            }
            (HoverPhase::Hovered(current), Some(marker)) => {
                self.leave(current);
                self.enter(marker, pointer, content(marker));
                HoverTransition::Switched {
                    from: current,
                    to: marker,
                }
            }
            (HoverPhase::Hovered(current), None) => {
                self.leave(current);
                HoverTransition::Left(current)
            }
        };

        if transition != HoverTransition::Unchanged {
            trace!(?transition, x = pointer.x, y = pointer.y, "hover transition");
        }
        transition
    }

    /// Pointer left the chart surface.
    pub fn pointer_leave(&mut self) -> HoverTransition {
        match self.phase {
            HoverPhase::Idle => HoverTransition::Unchanged,
            HoverPhase::Hovered(current) => {
                self.leave(current);
                HoverTransition::Left(current)
            }
        }
    }

    /// Drops hover, tooltip content and all emphasis immediately.
    ///
    /// Used when the markers themselves go away (new dataset, cleared surface).
    pub fn reset(&mut self) {
        self.phase = HoverPhase::Idle;
        self.transitions.clear();
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.hide();
        }
    }

    /// Tears down the tooltip overlay. A later hover creates a fresh one.
    pub fn detach(&mut self) {
        self.reset();
        self.overlay = None;
    }

    /// Emphasis of `marker` in `[0, 1]`.
    #[must_use]
    pub fn emphasis_level(&self, marker: MarkerId) -> f64 {
        self.transitions
            .iter()
            .find(|transition| transition.marker == marker)
            .map_or(0.0, |transition| transition.level())
    }

    /// Markers with non-zero emphasis (hovered, or still fading out).
    #[must_use]
    pub fn emphasized_markers(&self) -> Vec<MarkerId> {
        self.transitions
            .iter()
            .filter(|transition| transition.level() > 0.0)
            .map(|transition| transition.marker)
            .collect()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transitions
            .iter()
            .any(|transition| !transition.is_finished())
    }

    /// Advances emphasis animations. Returns `true` when any marker's visual
    /// changed.
    pub fn step(&mut self, delta_seconds: f64) -> bool {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 || !self.is_animating() {
            return false;
        }

        for transition in &mut self.transitions {
            if !transition.is_finished() {
                transition.elapsed += delta_seconds;
            }
        }
        self.transitions
            .retain(|transition| !(transition.is_finished() && transition.to_level == 0.0));
        true
    }

    #[must_use]
    pub fn marker_visual(&self, marker: MarkerId, base_fill: Color) -> (f64, Color) {
        self.style
            .marker_visual(base_fill, self.emphasis_level(marker))
    }

    fn tooltip_anchor(&self, pointer: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            pointer.x + self.tooltip_offset.dx,
            pointer.y + self.tooltip_offset.dy,
        )
    }

    fn enter(&mut self, marker: MarkerId, pointer: ScreenPoint, content: String) {
        let anchor = self.tooltip_anchor(pointer);
        let overlay = self.overlay.get_or_insert_with(TooltipOverlay::default);
        // A visible tooltip always has text to draw.
        if content.is_empty() {
            overlay.hide();
        } else {
            overlay.show(content, anchor);
        }
        self.phase = HoverPhase::Hovered(marker);
        self.start_transition(marker, 1.0);
    }

    fn leave(&mut self, marker: MarkerId) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.hide();
        }
        self.phase = HoverPhase::Idle;
        self.start_transition(marker, 0.0);
    }

    fn start_transition(&mut self, marker: MarkerId, to_level: f64) {
        let from_level = self.emphasis_level(marker);
        self.transitions
            .retain(|transition| transition.marker != marker);

        let duration = self.style.transition_seconds;
        if duration <= 0.0 && to_level == 0.0 {
            return;
        }
        self.transitions.push(EmphasisTransition {
            marker,
            from_level,
            to_level,
            elapsed: 0.0,
            duration,
        });
    }
}
