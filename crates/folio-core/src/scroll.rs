//! Scroll offset tracking for the navigation bar's compact mode.

/// Scroll offset (in CSS pixels) past which the navigation bar turns compact.
pub const DEFAULT_COMPACT_THRESHOLD: f64 = 100.0;

/// Snapshot of the last observed scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Vertical offset, never negative.
    pub offset_px: f64,

    /// Whether the offset is strictly past the threshold.
    pub compact: bool,
}

/// Returns whether `offset_px` puts the bar in compact mode.
///
/// There is no hysteresis: a single pixel past `threshold` flips the state.
pub fn is_compact(offset_px: f64, threshold: f64) -> bool {
    sanitize_offset(offset_px) > threshold
}

/// Overscroll bounce reports negative offsets on some platforms.
fn sanitize_offset(offset_px: f64) -> f64 {
    if offset_px.is_nan() {
        0.0
    } else {
        offset_px.max(0.0)
    }
}

/// Tracks the scroll offset of the page and derives the compact flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    state: ScrollState,
}

impl ScrollTracker {
    /// Create a tracker at offset zero.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: ScrollState::default(),
        }
    }

    /// Record a new offset.
    ///
    /// Returns `Some(compact)` when the compact flag changed, `None` otherwise.
    pub fn observe(&mut self, offset_px: f64) -> Option<bool> {
        let offset_px = sanitize_offset(offset_px);
        let compact = is_compact(offset_px, self.threshold);
        let changed = compact != self.state.compact;

        self.state = ScrollState { offset_px, compact };

        if changed {
            log::debug!("nav: compact={compact} at offset={offset_px}");
            Some(compact)
        } else {
            None
        }
    }

    /// Current state.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Whether the bar is currently compact.
    pub fn is_compact(&self) -> bool {
        self.state.compact
    }

    /// Threshold this tracker compares against.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_COMPACT_THRESHOLD)
    }
}
