//! Before/after comparison widget
//!
//! Two stacked photographs with a draggable vertical divider. The divider
//! position is a percentage of the container width, clamped to [0, 100];
//! the server renders the initial position and the page script keeps the
//! same bounds while dragging.

use serde::Serialize;

/// Default divider position: centered
pub const DEFAULT_SPLIT: f64 = 50.0;

/// Photographs shown in the transformation section
pub const BEFORE_IMAGE: &str =
    "https://images.unsplash.com/photo-1505934524419-f55db4db9a0a?auto=format&fit=crop&q=80&w=800";
pub const AFTER_IMAGE: &str =
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&q=80&w=800";

/// Divider position as a percentage of container width
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SplitPercent(f64);

impl SplitPercent {
    /// Clamp any input into [0, 100]; non-finite input recenters
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 100.0))
        } else {
            Self(DEFAULT_SPLIT)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Right-inset percentage clipping the before-image overlay
    pub fn overlay_inset(self) -> f64 {
        100.0 - self.0
    }
}

impl Default for SplitPercent {
    fn default() -> Self {
        Self(DEFAULT_SPLIT)
    }
}

/// The rendered comparison widget
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BeforeAfter {
    pub before: &'static str,
    pub after: &'static str,
    pub split: SplitPercent,
}

/// Widget state for the home page; `split` comes from the query string
/// when a visitor shares a dragged position.
pub fn section(split: Option<f64>) -> BeforeAfter {
    BeforeAfter {
        before: BEFORE_IMAGE,
        after: AFTER_IMAGE,
        split: split.map(SplitPercent::new).unwrap_or_default(),
    }
}
