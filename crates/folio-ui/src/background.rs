//! Decorative animated background.

use leptos::prelude::*;

const LINE_PATHS: &[&str] = &[
    "M-120 720 C 180 560, 420 880, 720 700 S 1260 520, 1560 640",
    "M-120 180 C 220 320, 460 40, 760 200 S 1240 380, 1560 160",
    "M-120 460 C 140 380, 380 600, 700 480 S 1180 300, 1560 420",
    "M-120 860 C 260 760, 520 960, 820 820 S 1300 700, 1560 800",
    "M-120 60 C 200 140, 500 -20, 780 90 S 1280 220, 1560 40",
    "M-120 580 C 300 460, 560 720, 860 560 S 1320 420, 1560 520",
    "M-120 320 C 160 240, 440 440, 680 300 S 1160 140, 1560 300",
    "M-120 780 C 120 880, 400 640, 660 780 S 1140 920, 1560 760",
];

const LINE_COLORS: &[&str] = &[
    "#46A5CA", "#8C2F2F", "#4FAE4D", "#D6590C", "#811010", "#247AFB", "#A534A0", "#A8A8A8",
];

/// Inline CSS for the `index`-th stroke.
///
/// Strokes share one duration and start at evenly spaced offsets so at
/// most a couple are drawing at any moment.
pub fn line_style(index: usize, duration_secs: f64) -> String {
    let count = LINE_PATHS.len().max(1) as f64;
    let delay = duration_secs * (index as f64) / count;
    format!(
        "stroke: {}; animation-duration: {duration_secs:.2}s; animation-delay: {delay:.2}s;",
        LINE_COLORS[index % LINE_COLORS.len()]
    )
}

/// Content centred over slowly drawn SVG strokes.
#[component]
pub fn BackgroundLines(
    /// Time for one stroke to sweep across.
    #[prop(default = 10.0)]
    duration_secs: f64,
    children: Children,
) -> impl IntoView {
    let lines = LINE_PATHS
        .iter()
        .enumerate()
        .map(|(index, path)| {
            view! { <path class="folio-background-line" d=*path style=line_style(index, duration_secs) /> }
        })
        .collect_view();

    view! {
      <div class="folio-background">
        <svg
          class="folio-background-svg"
          viewBox="0 0 1440 900"
          preserveAspectRatio="xMidYMid slice"
          fill="none"
          aria-hidden="true"
        >
          {lines}
        </svg>
        <div class="folio-background-content">{children()}</div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_delays_are_spread_over_duration() {
        assert!(line_style(0, 8.0).contains("animation-delay: 0.00s;"));
        assert!(line_style(4, 8.0).contains("animation-delay: 4.00s;"));
        assert!(line_style(7, 8.0).contains("animation-duration: 8.00s;"));
    }

    #[test]
    fn test_line_colors_cycle() {
        assert!(line_style(0, 10.0).starts_with("stroke: #46A5CA;"));
        assert!(line_style(LINE_COLORS.len(), 10.0).starts_with("stroke: #46A5CA;"));
    }
}
