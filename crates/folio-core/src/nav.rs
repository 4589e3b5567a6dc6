//! Navigation entries and the per-link view model.

use serde::{Deserialize, Serialize};

/// Entries past this count still render but crowd the compact bar.
pub const RECOMMENDED_MAX_ENTRIES: usize = 5;

/// A navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavEntry {
    /// Display label.
    pub name: String,

    /// Link URL or path. Not validated.
    pub link: String,
}

impl NavEntry {
    /// Create a new navigation entry.
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    /// Accessible label for the rendered link.
    pub fn aria_label(&self) -> String {
        format!("Navigate to {}", self.name)
    }
}

/// Everything a component needs to render one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub index: usize,
    pub name: String,
    pub href: String,
    pub aria_label: String,
}

/// Build the link models for `entries`, in order.
pub fn nav_links(entries: &[NavEntry]) -> Vec<NavLink> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| NavLink {
            index,
            name: entry.name.clone(),
            href: entry.link.clone(),
            aria_label: entry.aria_label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<NavEntry> {
        vec![
            NavEntry::new("X", "https://x.com/someone"),
            NavEntry::new("Github", "https://github.com/someone"),
            NavEntry::new("Projects", "./pages/Projects"),
        ]
    }

    #[test]
    fn test_nav_entry_creation() {
        let entry = NavEntry::new("Projects", "./pages/Projects");
        assert_eq!(entry.name, "Projects");
        assert_eq!(entry.link, "./pages/Projects");
        assert_eq!(entry.aria_label(), "Navigate to Projects");
    }

    #[test]
    fn test_links_follow_entry_order() {
        let links = nav_links(&entries());
        let names: Vec<_> = links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["X", "Github", "Projects"]);

        let indices: Vec<_> = links.iter().map(|l| l.index).collect();
        assert_eq!(indices, [0, 1, 2]);
        assert_eq!(links[1].href, "https://github.com/someone");
        assert_eq!(links[1].aria_label, "Navigate to Github");
    }

    #[test]
    fn test_empty_entries_yield_no_links() {
        let links = nav_links(&[]);
        assert!(links.is_empty());
    }

    #[test]
    fn test_nav_entry_serialization() {
        let entry = NavEntry::new("Mail", "mailto:someone@example.com");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"name\":\"Mail\""));
        assert!(json.contains("\"link\":\"mailto:someone@example.com\""));
    }
}
