//! Site configuration.
//!
//! The configuration is a TOML document compiled into the page. Every
//! section has defaults, so an empty document yields the stock site.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    menu::DEFAULT_MENU_DURATION_MS,
    motion::Spring,
    nav::{NavEntry, RECOMMENDED_MAX_ENTRIES},
    shell::ShellLayout,
    typewriter::{RevealTiming, Word},
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Identity and contact details.
    #[serde(default)]
    pub site: SiteMeta,

    /// Navigation entries, in display order.
    #[serde(default = "default_nav")]
    pub nav: Vec<NavEntry>,

    /// Headline words, in display order.
    #[serde(default = "default_words")]
    pub words: Vec<Word>,

    /// Compact transition geometry.
    #[serde(default)]
    pub layout: ShellLayout,

    /// Animation settings.
    #[serde(default)]
    pub motion: MotionConfig,

    /// Headline reveal timing.
    #[serde(default)]
    pub typewriter: RevealTiming,

    /// Cursor overlay settings.
    #[serde(default)]
    pub cursor: CursorConfig,
}

/// Identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Document title.
    pub title: String,

    /// Line shown above the headline.
    pub greeting: String,

    /// Target of the mail buttons, usually a `mailto:` link.
    pub mail: String,

    /// Logo image URL.
    pub logo: String,
}

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Spring driving the navigation shell.
    pub spring: Spring,

    /// Length of the mobile menu enter and exit animations.
    pub menu_duration_ms: u32,
}

/// Cursor overlay settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub enabled: bool,
    pub size_px: f64,
}

fn default_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::new("X", "https://x.com/divydoesnotcode"),
        NavEntry::new("LinkedIn", "https://www.linkedin.com/in/divy-barot"),
        NavEntry::new("Github", "https://github.com/divydoesnotcode"),
        NavEntry::new("Projects", "./pages/Projects"),
    ]
}

fn default_words() -> Vec<Word> {
    vec![
        Word::new("This"),
        Word::new("is"),
        Word::emphasized("Divy Barot."),
    ]
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Divy Barot".to_string(),
            greeting: "Hey There 👋🏻 !!".to_string(),
            mail: "mailto:workwithdivy@gmail.com".to_string(),
            logo: "https://assets.aceternity.com/logo-dark.png".to_string(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            spring: Spring::NAV,
            menu_duration_ms: DEFAULT_MENU_DURATION_MS,
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size_px: 16.0,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta::default(),
            nav: default_nav(),
            words: default_words(),
            layout: ShellLayout::default(),
            motion: MotionConfig::default(),
            typewriter: RevealTiming::default(),
            cursor: CursorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `content`, falling back to the defaults when it is unusable.
    pub fn from_toml_str_or_default(content: &str) -> Self {
        Self::from_toml_str(content).unwrap_or_else(|err| {
            log::warn!("falling back to default site config: {err}");
            Self::default()
        })
    }

    /// Validate the configuration.
    ///
    /// Empty `nav` and `words` lists are accepted; they render as an empty
    /// nav row and a greeting-only headline.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;

        if !layout.compact_threshold.is_finite() || layout.compact_threshold < 0.0 {
            return Err(CoreError::config(
                "layout.compact_threshold",
                "must be a finite, non-negative number",
            ));
        }
        check_percent("layout.desktop_compact_width_pct", layout.desktop_compact_width_pct)?;
        check_percent("layout.mobile_compact_width_pct", layout.mobile_compact_width_pct)?;

        if !layout.compact_offset_y_px.is_finite() {
            return Err(CoreError::config("layout.compact_offset_y_px", "must be finite"));
        }
        if !layout.mobile_compact_padding_px.is_finite() || layout.mobile_compact_padding_px < 0.0 {
            return Err(CoreError::config(
                "layout.mobile_compact_padding_px",
                "must be a finite, non-negative number",
            ));
        }

        let spring = &self.motion.spring;
        check_positive("motion.spring.stiffness", spring.stiffness)?;
        check_positive("motion.spring.damping", spring.damping)?;
        check_positive("motion.spring.mass", spring.mass)?;

        if self.motion.menu_duration_ms == 0 {
            return Err(CoreError::config(
                "motion.menu_duration_ms",
                "must be greater than zero",
            ));
        }
        check_positive("cursor.size_px", self.cursor.size_px)?;

        if self.nav.len() > RECOMMENDED_MAX_ENTRIES {
            log::warn!(
                "{} nav entries configured; the compact bar fits about {RECOMMENDED_MAX_ENTRIES}",
                self.nav.len()
            );
        }

        Ok(())
    }
}

fn check_percent(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 100.0 {
        Ok(())
    } else {
        Err(CoreError::config(field, "must be within (0, 100]"))
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::config(field, "must be greater than zero"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Test Folio"
greeting = "Hello"
mail = "mailto:test@example.com"

[[nav]]
name = "Blog"
link = "/blog"

[[nav]]
name = "Github"
link = "https://github.com/test"

[[words]]
text = "Hi,"

[[words]]
text = "Tester"
emphasis = true

[layout]
compact_threshold = 64.0
desktop_compact_width_pct = 50.0

[motion]
menu_duration_ms = 300

[motion.spring]
stiffness = 300.0
damping = 40.0

[typewriter]
char_stagger_ms = 40

[cursor]
enabled = false
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let config = SiteConfig::from_toml_str(&create_test_config()).expect("load config");

        assert_eq!(config.site.title, "Test Folio");
        assert_eq!(config.site.greeting, "Hello");
        assert_eq!(config.site.mail, "mailto:test@example.com");
        assert_eq!(config.site.logo, SiteMeta::default().logo);
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.nav[0], NavEntry::new("Blog", "/blog"));
        assert_eq!(config.words, vec![Word::new("Hi,"), Word::emphasized("Tester")]);
        assert_eq!(config.layout.compact_threshold, 64.0);
        assert_eq!(config.layout.desktop_compact_width_pct, 50.0);
        assert_eq!(config.layout.mobile_compact_width_pct, 90.0);
        assert_eq!(config.motion.menu_duration_ms, 300);
        assert_eq!(config.motion.spring.stiffness, 300.0);
        assert_eq!(config.motion.spring.mass, 1.0);
        assert_eq!(config.typewriter.char_stagger_ms, 40);
        assert_eq!(config.typewriter.start_delay_ms, 1000);
        assert!(!config.cursor.enabled);
    }

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::from_toml_str("").expect("load config");
        assert_eq!(config, SiteConfig::default());

        let names: Vec<_> = config.nav.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["X", "LinkedIn", "Github", "Projects"]);
        assert_eq!(config.words.len(), 3);
        assert!(config.words[2].emphasis);
        assert_eq!(config.layout.compact_threshold, 100.0);
        assert_eq!(config.motion.spring, Spring::NAV);
        assert_eq!(config.motion.menu_duration_ms, 200);
    }

    #[test]
    fn test_empty_lists_are_accepted() {
        let config = SiteConfig::from_toml_str("nav = []\nwords = []\n").expect("load config");
        assert!(config.nav.is_empty());
        assert!(config.words.is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_width() {
        let result = SiteConfig::from_toml_str("[layout]\nmobile_compact_width_pct = 120.0\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("mobile_compact_width_pct"));
        assert!(err.contains("(0, 100]"));

        assert!(SiteConfig::from_toml_str("[layout]\ndesktop_compact_width_pct = 0.0\n").is_err());
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let err = SiteConfig::from_toml_str("[layout]\ncompact_threshold = -1.0\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("compact_threshold"));
    }

    #[test]
    fn test_rejects_bad_spring() {
        let err = SiteConfig::from_toml_str("[motion.spring]\nstiffness = 0.0\ndamping = 50.0\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("motion.spring.stiffness"));
    }

    #[test]
    fn test_rejects_zero_menu_duration() {
        let result = SiteConfig::from_toml_str("[motion]\nmenu_duration_ms = 0\n");
        assert!(matches!(
            result,
            Err(CoreError::Config {
                field: "motion.menu_duration_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let result = SiteConfig::from_toml_str("[[nav]]\nname = ");
        assert!(matches!(result, Err(CoreError::Toml(_))));
    }

    #[test]
    fn test_fallback_to_default() {
        let config = SiteConfig::from_toml_str_or_default("[layout]\ncompact_threshold = \"high\"");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_many_nav_entries_only_warn() {
        let mut config = SiteConfig::default();
        config.nav = (0..8)
            .map(|i| NavEntry::new(format!("Item {i}"), format!("/item/{i}")))
            .collect();
        assert!(config.validate().is_ok());
    }
}
