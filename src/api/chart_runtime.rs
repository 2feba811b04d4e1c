use serde::{Deserialize, Serialize};

/// Why a frame was rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderReason {
    /// Dataset replaced or a record appended.
    DataChanged,
    /// Hover entered, moved, switched or left.
    Interaction,
    /// Emphasis animation advanced.
    Animation,
    /// Host asked for a repaint.
    Requested,
}

/// Redraw counters, one bucket per [`RenderReason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderStats {
    pub data_redraws: u64,
    pub interaction_redraws: u64,
    pub animation_redraws: u64,
    pub requested_redraws: u64,
    pub clears: u64,
}

impl RenderStats {
    pub(super) fn record(&mut self, reason: RenderReason) {
        let bucket = match reason {
            RenderReason::DataChanged => &mut self.data_redraws,
            RenderReason::Interaction => &mut self.interaction_redraws,
            RenderReason::Animation => &mut self.animation_redraws,
            RenderReason::Requested => &mut self.requested_redraws,
        };
        *bucket += 1;
    }

    #[must_use]
    pub fn total_redraws(self) -> u64 {
        self.data_redraws + self.interaction_redraws + self.animation_redraws + self.requested_redraws
    }
}
