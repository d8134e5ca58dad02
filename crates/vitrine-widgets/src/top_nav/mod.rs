//! Top Navigation Widget
//!
//! Site-style header for the gallery window:
//! - Brand logo and tagline
//! - Version selector dropdown
//! - Section links (Tutorials, API, Components)
//! - External icon links (repository, community chat)
//! - Theme toggle
//! - Compact-nav trigger that opens a drawer with the section links
//!
//! The bar owns only its two open/closed flags. Theme mode and the current
//! version belong to the host application and arrive as view inputs; theme
//! flips and link activations are reported back through `handle_message`.

mod message;
mod view;

pub use message::TopNavMessage;
pub use view::top_nav_view;

use serde::{Deserialize, Serialize};

/// Section links shown in the nav row and the compact drawer
pub const SECTION_LINKS: [&str; 3] = ["Tutorials", "API", "Components"];

/// Site identity and link targets shown in the top navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Brand name shown as the logo text
    pub name: String,
    /// Short tagline next to the brand
    pub tagline: String,
    /// Repository URL (icon link)
    pub repo_url: String,
    /// Community chat URL (icon link)
    pub chat_url: String,
    /// Documentation versions, newest first
    pub versions: Vec<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Vitrine".to_string(),
            tagline: "component gallery".to_string(),
            repo_url: "https://github.com/vitrine-ui/vitrine".to_string(),
            chat_url: "https://discord.gg/vitrine".to_string(),
            versions: vec!["v0.3".to_string(), "v0.2".to_string(), "v0.1".to_string()],
        }
    }
}

/// State for the top navigation bar
#[derive(Debug, Clone, Default)]
pub struct TopNavState {
    /// Whether the version selector dropdown is open
    pub version_picker_open: bool,
    /// Whether the compact-nav drawer is open
    pub compact_nav_open: bool,
}

impl TopNavState {
    /// Create top navigation state with everything closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a message and update local state
    ///
    /// Returns true when the host has to act (version change, theme flip,
    /// external link); pure open/close bookkeeping returns false.
    pub fn handle_message(&mut self, message: &TopNavMessage) -> bool {
        match message {
            TopNavMessage::ToggleVersionPicker => {
                self.version_picker_open = !self.version_picker_open;
                false
            }
            TopNavMessage::SelectVersion(_) => {
                self.version_picker_open = false;
                true
            }
            TopNavMessage::ToggleCompactNav => {
                self.compact_nav_open = !self.compact_nav_open;
                false
            }
            TopNavMessage::CloseCompactNav => {
                self.compact_nav_open = false;
                false
            }
            TopNavMessage::ToggleTheme => true,
            TopNavMessage::OpenLink(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_and_drawer_toggle_independently() {
        let mut state = TopNavState::new();

        assert!(!state.handle_message(&TopNavMessage::ToggleVersionPicker));
        assert!(state.version_picker_open);
        assert!(!state.compact_nav_open);

        assert!(!state.handle_message(&TopNavMessage::ToggleCompactNav));
        assert!(state.version_picker_open);
        assert!(state.compact_nav_open);

        assert!(!state.handle_message(&TopNavMessage::ToggleVersionPicker));
        assert!(!state.version_picker_open);
        assert!(state.compact_nav_open);
    }

    #[test]
    fn test_select_version_closes_picker() {
        let mut state = TopNavState::new();
        state.handle_message(&TopNavMessage::ToggleVersionPicker);
        assert!(state.version_picker_open);

        // Selecting reports a host action and collapses the dropdown
        assert!(state.handle_message(&TopNavMessage::SelectVersion(1)));
        assert!(!state.version_picker_open);
    }

    #[test]
    fn test_close_compact_nav() {
        let mut state = TopNavState::new();
        state.handle_message(&TopNavMessage::ToggleCompactNav);
        assert!(state.compact_nav_open);
        assert!(!state.handle_message(&TopNavMessage::CloseCompactNav));
        assert!(!state.compact_nav_open);
    }

    #[test]
    fn test_theme_and_links_are_host_actions() {
        let mut state = TopNavState::new();
        assert!(state.handle_message(&TopNavMessage::ToggleTheme));
        assert!(state.handle_message(&TopNavMessage::OpenLink(
            "https://example.com".to_string()
        )));
        // Neither touches the local flags
        assert!(!state.version_picker_open);
        assert!(!state.compact_nav_open);
    }
}
