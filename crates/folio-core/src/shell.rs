//! Target styles of the navigation shell.
//!
//! Compact mode and hover are independent inputs: compact drives geometry
//! (width, offset, padding, radius), hover drives elevation (blur, shadow).
//! The two are merged into one inline style.

use serde::{Deserialize, Serialize};

use crate::{motion::Spring, scroll::DEFAULT_COMPACT_THRESHOLD};

/// Corner radius of the mobile container at rest.
pub const MOBILE_RADIUS_REST: &str = "2rem";

/// Corner radius of the mobile container once compact.
pub const MOBILE_RADIUS_COMPACT: &str = "4px";

const TRANSITION_PROPERTIES: &[&str] = &[
    "width",
    "transform",
    "padding",
    "border-radius",
    "backdrop-filter",
    "box-shadow",
];

/// Geometry constants for the compact transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellLayout {
    /// Scroll offset past which the bar turns compact.
    pub compact_threshold: f64,

    /// Desktop bar width when compact, in percent.
    pub desktop_compact_width_pct: f64,

    /// Mobile container width when compact, in percent.
    pub mobile_compact_width_pct: f64,

    /// Downward shift when compact, in pixels.
    pub compact_offset_y_px: f64,

    /// Horizontal padding of the compact mobile container, in pixels.
    pub mobile_compact_padding_px: f64,
}

impl Default for ShellLayout {
    fn default() -> Self {
        Self {
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
            desktop_compact_width_pct: 40.0,
            mobile_compact_width_pct: 90.0,
            compact_offset_y_px: 20.0,
            mobile_compact_padding_px: 12.0,
        }
    }
}

/// Glass effect intensity of the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elevation {
    pub blur_px: f64,
    pub saturate_pct: f64,
    pub shadow_alpha: f64,
    pub inset_alpha: f64,
}

impl Elevation {
    pub const REST: Elevation = Elevation {
        blur_px: 16.0,
        saturate_pct: 180.0,
        shadow_alpha: 0.37,
        inset_alpha: 0.10,
    };

    pub const HOVERED: Elevation = Elevation {
        blur_px: 18.0,
        saturate_pct: 190.0,
        shadow_alpha: 0.40,
        inset_alpha: 0.12,
    };

    pub fn for_hover(hovered: bool) -> Self {
        if hovered { Self::HOVERED } else { Self::REST }
    }

    pub fn backdrop_filter(&self) -> String {
        format!("blur({}px) saturate({}%)", self.blur_px, self.saturate_pct)
    }

    pub fn box_shadow(&self) -> String {
        format!(
            "0 8px 32px 0 rgba(0, 0, 0, {:.2}), inset 0 1px 0 0 rgba(255, 255, 255, {:.2})",
            self.shadow_alpha, self.inset_alpha
        )
    }
}

/// Resolved style of a shell variant for one (compact, hovered) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellStyle {
    pub width_pct: f64,
    pub offset_y_px: f64,
    pub padding_x_px: Option<f64>,
    pub radius: Option<&'static str>,
    pub elevation: Elevation,
}

impl ShellStyle {
    /// Desktop bar: shrinks and drops down when compact.
    pub fn desktop(layout: &ShellLayout, compact: bool, hovered: bool) -> Self {
        Self {
            width_pct: if compact {
                layout.desktop_compact_width_pct
            } else {
                100.0
            },
            offset_y_px: offset_for(layout, compact),
            padding_x_px: None,
            radius: None,
            elevation: Elevation::for_hover(hovered),
        }
    }

    /// Mobile container: narrows, gains padding and squares its corners.
    pub fn mobile(layout: &ShellLayout, compact: bool, hovered: bool) -> Self {
        Self {
            width_pct: if compact {
                layout.mobile_compact_width_pct
            } else {
                100.0
            },
            offset_y_px: offset_for(layout, compact),
            padding_x_px: Some(if compact {
                layout.mobile_compact_padding_px
            } else {
                0.0
            }),
            radius: Some(if compact {
                MOBILE_RADIUS_COMPACT
            } else {
                MOBILE_RADIUS_REST
            }),
            elevation: Elevation::for_hover(hovered),
        }
    }

    /// The `width` value, e.g. `40%`.
    pub fn width(&self) -> String {
        format!("{}%", self.width_pct)
    }

    /// Inline CSS, including the spring transition.
    pub fn to_css(&self, spring: &Spring) -> String {
        let backdrop = self.elevation.backdrop_filter();
        let mut css = format!(
            "width: {}; transform: translateY({}px); backdrop-filter: {backdrop}; -webkit-backdrop-filter: {backdrop}; box-shadow: {};",
            self.width(),
            self.offset_y_px,
            self.elevation.box_shadow(),
        );

        if let Some(padding) = self.padding_x_px {
            css.push_str(&format!(
                " padding-left: {padding}px; padding-right: {padding}px;"
            ));
        }
        if let Some(radius) = self.radius {
            css.push_str(&format!(" border-radius: {radius};"));
        }

        css.push_str(&format!(
            " transition: {};",
            spring.css_transition(TRANSITION_PROPERTIES)
        ));
        css
    }
}

fn offset_for(layout: &ShellLayout, compact: bool) -> f64 {
    if compact {
        layout.compact_offset_y_px
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_widths() {
        let layout = ShellLayout::default();
        assert_eq!(ShellStyle::desktop(&layout, true, false).width(), "40%");
        assert_eq!(ShellStyle::desktop(&layout, false, false).width(), "100%");
    }

    #[test]
    fn test_mobile_widths() {
        let layout = ShellLayout::default();
        assert_eq!(ShellStyle::mobile(&layout, true, false).width(), "90%");
        assert_eq!(ShellStyle::mobile(&layout, false, false).width(), "100%");
    }

    #[test]
    fn test_compact_shifts_down() {
        let layout = ShellLayout::default();
        assert_eq!(ShellStyle::desktop(&layout, true, false).offset_y_px, 20.0);
        assert_eq!(ShellStyle::desktop(&layout, false, false).offset_y_px, 0.0);
        assert_eq!(ShellStyle::mobile(&layout, true, true).offset_y_px, 20.0);
    }

    #[test]
    fn test_mobile_padding_and_radius() {
        let layout = ShellLayout::default();

        let rest = ShellStyle::mobile(&layout, false, false);
        assert_eq!(rest.padding_x_px, Some(0.0));
        assert_eq!(rest.radius, Some("2rem"));

        let compact = ShellStyle::mobile(&layout, true, false);
        assert_eq!(compact.padding_x_px, Some(12.0));
        assert_eq!(compact.radius, Some("4px"));
    }

    #[test]
    fn test_hover_and_compact_are_orthogonal() {
        let layout = ShellLayout::default();
        for compact in [false, true] {
            let rest = ShellStyle::desktop(&layout, compact, false);
            let hovered = ShellStyle::desktop(&layout, compact, true);

            assert_eq!(rest.width_pct, hovered.width_pct);
            assert_eq!(rest.offset_y_px, hovered.offset_y_px);
            assert_eq!(rest.elevation, Elevation::REST);
            assert_eq!(hovered.elevation, Elevation::HOVERED);
        }
    }

    #[test]
    fn test_hover_raises_elevation() {
        let rest = Elevation::REST;
        let hovered = Elevation::HOVERED;
        assert!(hovered.blur_px > rest.blur_px);
        assert!(hovered.saturate_pct > rest.saturate_pct);
        assert!(hovered.shadow_alpha > rest.shadow_alpha);
        assert!(hovered.inset_alpha > rest.inset_alpha);
    }

    #[test]
    fn test_desktop_css() {
        let css = ShellStyle::desktop(&ShellLayout::default(), true, true).to_css(&Spring::NAV);
        assert!(css.starts_with("width: 40%; transform: translateY(20px);"));
        assert!(css.contains("backdrop-filter: blur(18px) saturate(190%);"));
        assert!(css.contains("rgba(0, 0, 0, 0.40)"));
        assert!(css.contains("rgba(255, 255, 255, 0.12)"));
        assert!(!css.contains("border-radius"));
        assert!(css.contains("transition: width "));
    }

    #[test]
    fn test_mobile_css() {
        let css = ShellStyle::mobile(&ShellLayout::default(), false, false).to_css(&Spring::NAV);
        assert!(css.starts_with("width: 100%; transform: translateY(0px);"));
        assert!(css.contains("padding-left: 0px; padding-right: 0px;"));
        assert!(css.contains("border-radius: 2rem;"));
        assert!(css.contains("blur(16px) saturate(180%)"));
    }

    #[test]
    fn test_custom_layout() {
        let layout = ShellLayout {
            desktop_compact_width_pct: 55.5,
            ..ShellLayout::default()
        };
        assert_eq!(ShellStyle::desktop(&layout, true, false).width(), "55.5%");
    }
}
