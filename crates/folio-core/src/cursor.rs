//! Position of the custom cursor overlay.

/// Pointer position and visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl CursorState {
    /// Pointer moved to viewport coordinates (`x`, `y`).
    pub fn moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.visible = true;
    }

    /// Pointer left the window. The last position is kept so the dot fades
    /// out where it was.
    pub fn left(&mut self) {
        self.visible = false;
    }

    /// Inline CSS centring a dot of `size_px` on the pointer.
    pub fn to_css(&self, size_px: f64) -> String {
        let half = size_px / 2.0;
        format!(
            "opacity: {}; transform: translate3d({:.1}px, {:.1}px, 0);",
            if self.visible { 1 } else { 0 },
            self.x - half,
            self.y - half,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_first_move() {
        let cursor = CursorState::default();
        assert!(!cursor.visible);
        assert!(cursor.to_css(16.0).starts_with("opacity: 0;"));
    }

    #[test]
    fn test_move_then_leave() {
        let mut cursor = CursorState::default();
        cursor.moved(120.0, 48.0);
        assert!(cursor.visible);
        assert_eq!(
            cursor.to_css(16.0),
            "opacity: 1; transform: translate3d(112.0px, 40.0px, 0);"
        );

        cursor.left();
        assert!(!cursor.visible);
        assert_eq!((cursor.x, cursor.y), (120.0, 48.0));
    }
}
