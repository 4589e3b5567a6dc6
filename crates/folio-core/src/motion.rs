//! Spring parameters and their CSS transition equivalent.
//!
//! The browser does the actual interpolation. A spring is reduced to the
//! time its slowest mode needs to settle, which becomes the transition
//! duration, paired with a fixed ease-out curve.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Ease-out curve used for every spring-driven transition.
pub const SPRING_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

const MIN_SETTLE_SECS: f64 = 0.15;
const MAX_SETTLE_SECS: f64 = 1.5;

/// Damped spring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl Spring {
    /// Spring used by the navigation bar.
    pub const NAV: Spring = Spring {
        stiffness: 200.0,
        damping: 50.0,
        mass: 1.0,
    };

    /// Exponential decay rate of the slowest mode, in 1/s.
    fn decay_rate(&self) -> f64 {
        let half_damping = self.damping / (2.0 * self.mass);
        let natural_sq = self.stiffness / self.mass;
        let disc = half_damping * half_damping - natural_sq;

        if disc > 0.0 {
            // Overdamped: the slow root dominates.
            half_damping - disc.sqrt()
        } else {
            half_damping
        }
    }

    /// Approximate time for the spring to come to rest.
    pub fn settle_secs(&self) -> f64 {
        let rate = self.decay_rate();
        if !rate.is_finite() || rate <= 0.0 {
            return MAX_SETTLE_SECS;
        }
        (4.0 / rate).clamp(MIN_SETTLE_SECS, MAX_SETTLE_SECS)
    }

    /// [`Spring::settle_secs`] as a timer duration.
    pub fn settle_duration(&self) -> Duration {
        Duration::from_secs_f64(self.settle_secs())
    }

    /// CSS `transition` value animating `properties` with this spring.
    pub fn css_transition(&self, properties: &[&str]) -> String {
        let secs = self.settle_secs();
        properties
            .iter()
            .map(|prop| format!("{prop} {secs:.2}s {SPRING_EASING}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::NAV
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_spring_settles_within_a_second() {
        let secs = Spring::NAV.settle_secs();
        assert!(secs > 0.5 && secs < 1.0, "{secs}");
    }

    #[test]
    fn test_stiffer_spring_settles_faster() {
        let soft = Spring {
            stiffness: 100.0,
            damping: 20.0,
            mass: 1.0,
        };
        let stiff = Spring {
            stiffness: 400.0,
            damping: 25.0,
            mass: 1.0,
        };
        assert!(stiff.settle_secs() < soft.settle_secs());
    }

    #[test]
    fn test_settle_is_clamped() {
        let sluggish = Spring {
            stiffness: 1.0,
            damping: 100.0,
            mass: 1.0,
        };
        assert_eq!(sluggish.settle_secs(), 1.5);

        let snappy = Spring {
            stiffness: 10_000.0,
            damping: 200.0,
            mass: 1.0,
        };
        assert_eq!(snappy.settle_secs(), 0.15);
    }

    #[test]
    fn test_settle_duration_matches_transition() {
        let spring = Spring::NAV;
        let millis = spring.settle_duration().as_millis();
        assert_eq!(millis, (spring.settle_secs() * 1000.0) as u128);
        assert!(spring.css_transition(&["width"]).contains(&format!("{:.2}s", millis as f64 / 1000.0)));
    }

    #[test]
    fn test_css_transition_lists_every_property() {
        let css = Spring::NAV.css_transition(&["width", "transform"]);
        assert!(css.starts_with("width "));
        assert!(css.contains(", transform "));
        assert_eq!(css.matches(SPRING_EASING).count(), 2);
    }
}
