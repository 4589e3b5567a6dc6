//! Pointer hover state for the navigation bar and its item group.

/// Hover state of a single interactive element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: bool,
}

impl HoverTracker {
    /// Pointer entered the element.
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the element.
    pub fn leave(&mut self) {
        self.hovered = false;
    }

    /// Whether the pointer is over the element.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

/// Which item of a fixed-size group is under the pointer.
///
/// Only leaving the whole group clears the index, so sliding from one item
/// straight onto the next never passes through "nothing hovered".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverGroup {
    len: usize,
    hovered: Option<usize>,
    anchor: Option<usize>,
    sliding: bool,
}

impl HoverGroup {
    /// Create a group of `len` items with nothing hovered.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            hovered: None,
            anchor: None,
            sliding: false,
        }
    }

    /// Pointer entered item `index`. Out of range indices are ignored.
    pub fn enter(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.sliding = self.hovered.is_some();
        self.hovered = Some(index);
        self.anchor = Some(index);
    }

    /// Pointer left the group container.
    pub fn leave_group(&mut self) {
        self.hovered = None;
    }

    /// Index of the hovered item, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Last item the highlight sat behind.
    ///
    /// Survives [`HoverGroup::leave_group`] so the highlight fades out in
    /// place instead of sliding back to the origin.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Whether item `index` is the hovered one.
    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Whether the highlight moves from one item to another.
    ///
    /// False when it reappears after the pointer was outside the group: it
    /// then fades in at the new item without sliding across the bar.
    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    /// Highlight geometry from the current layout.
    ///
    /// `measure` returns the anchor item's `(left, width)` in pixels. It is
    /// called on every evaluation since the bar can resize under a hovered
    /// item. `None` when nothing was hovered yet or measuring failed.
    pub fn frame(
        &self,
        measure: impl FnOnce(usize) -> Option<(f64, f64)>,
    ) -> Option<HighlightFrame> {
        let (left_px, width_px) = measure(self.anchor?)?;
        Some(HighlightFrame {
            left_px,
            width_px,
            visible: self.hovered.is_some(),
            slide: self.sliding,
        })
    }
}

/// Geometry of the shared highlight pill behind the hovered item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightFrame {
    pub left_px: f64,
    pub width_px: f64,
    pub visible: bool,
    /// Animate position and width, not just opacity.
    pub slide: bool,
}

impl HighlightFrame {
    /// Inline CSS for the highlight element.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity: {}; width: {:.0}px; transform: translateX({:.0}px);",
            if self.visible { 1 } else { 0 },
            self.width_px,
            self.left_px,
        );
        if !self.slide {
            css.push_str(" transition-property: opacity;");
        }
        css
    }
}

/// Inline CSS for a highlight with nothing to sit behind yet.
pub const HIDDEN_HIGHLIGHT_CSS: &str =
    "opacity: 0; width: 0px; transform: translateX(0px); transition-property: opacity;";
