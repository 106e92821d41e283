//! Layout configuration.

use serde::{Deserialize, Serialize};

use crate::clock::ClockFormat;
use crate::merge::MergePolicy;

/// Knobs for laying out and labelling a board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Whether back-to-back work orders share a cluster.
    pub merge_policy: MergePolicy,
    /// Gap between side-by-side blocks, subtracted from each block's width
    /// by the rendering surface (CSS `rem`).
    pub gutter_rem: f64,
    /// How times are printed on block labels and the axis.
    pub clock: ClockFormat,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            merge_policy: MergePolicy::Touching,
            gutter_rem: 1.0,
            clock: ClockFormat::default(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    pub fn with_gutter_rem(mut self, gutter_rem: f64) -> Self {
        self.gutter_rem = gutter_rem.max(0.0);
        self
    }

    pub fn with_clock(mut self, clock: ClockFormat) -> Self {
        self.clock = clock;
        self
    }
}
