//! Example Toolbar Widget
//!
//! The side panel attached to every component demo. A small nav row toggles
//! between two mutually exclusive panels:
//! - **Controls**: property grid editing the demo's inputs (optional)
//! - **Visualizer**: snapshot of the demo's current state (always present)
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────┐
//! │  [Controls] [Visualizer]       │   ← nav row, one button marked active
//! ├────────────────────────────────┤
//! │                                │
//! │     active panel content       │   ← exactly one region shown
//! │                                │
//! └────────────────────────────────┘
//! ```
//!
//! State lives in [`ToolbarState`]; the view function [`toolbar`] takes the
//! state, the panel contents and an `on_select` callback, following the
//! iced 0.14 pattern of view functions + callback closures.

mod view;

pub use view::toolbar;

/// The two toolbar panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarTab {
    /// Property grid for the demo's inputs
    Controls,
    /// State snapshot of the running demo
    Visualizer,
}

impl std::fmt::Display for ToolbarTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Controls => write!(f, "Controls"),
            Self::Visualizer => write!(f, "Visualizer"),
        }
    }
}

/// Active-tab state for the example toolbar
///
/// Exactly one tab is active at any time. A demo without a controls panel
/// has no Controls tab to land on, so the state seeds to Visualizer in that
/// case (and whenever the demo explicitly starts on the visualizer).
#[derive(Debug, Clone)]
pub struct ToolbarState {
    /// Currently active tab
    active: ToolbarTab,
    /// Whether the hosting demo supplied a controls panel
    has_controls: bool,
}

impl ToolbarState {
    /// Create toolbar state for a demo
    ///
    /// `force_visualizer` wins over everything else; without it the toolbar
    /// opens on Controls when a controls panel exists, Visualizer otherwise.
    pub fn new(has_controls: bool, force_visualizer: bool) -> Self {
        let active = if force_visualizer || !has_controls {
            ToolbarTab::Visualizer
        } else {
            ToolbarTab::Controls
        };
        Self {
            active,
            has_controls,
        }
    }

    /// The currently active tab
    pub fn active(&self) -> ToolbarTab {
        self.active
    }

    /// Whether the hosting demo supplied a controls panel
    pub fn has_controls(&self) -> bool {
        self.has_controls
    }

    /// Whether the given tab is the active one
    ///
    /// Drives both the nav button highlight and which content region is
    /// composed into the widget tree, so the two can never disagree.
    pub fn is_active(&self, tab: ToolbarTab) -> bool {
        self.active == tab
    }

    /// Activate a tab, returning whether the state changed
    ///
    /// Selecting `Controls` on a demo without a controls panel is ignored:
    /// the nav never offers that button, so such a call can only come from
    /// stale input.
    pub fn select(&mut self, tab: ToolbarTab) -> bool {
        if tab == ToolbarTab::Controls && !self.has_controls {
            log::debug!("toolbar: ignoring Controls selection, demo has no controls panel");
            return false;
        }
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_seeding() {
        // No controls panel: always open on the visualizer
        assert_eq!(
            ToolbarState::new(false, false).active(),
            ToolbarTab::Visualizer
        );
        assert_eq!(
            ToolbarState::new(false, true).active(),
            ToolbarTab::Visualizer
        );
        // Controls panel present: open on controls unless overridden
        assert_eq!(
            ToolbarState::new(true, false).active(),
            ToolbarTab::Controls
        );
        assert_eq!(
            ToolbarState::new(true, true).active(),
            ToolbarTab::Visualizer
        );
    }

    #[test]
    fn test_exactly_one_tab_active() {
        let mut state = ToolbarState::new(true, false);
        let sequence = [
            ToolbarTab::Visualizer,
            ToolbarTab::Visualizer,
            ToolbarTab::Controls,
            ToolbarTab::Visualizer,
            ToolbarTab::Controls,
        ];
        for tab in sequence {
            state.select(tab);
            assert_ne!(
                state.is_active(ToolbarTab::Controls),
                state.is_active(ToolbarTab::Visualizer)
            );
        }
    }

    #[test]
    fn test_select_switches_both_consumers() {
        let mut state = ToolbarState::new(true, false);

        assert!(state.select(ToolbarTab::Visualizer));
        assert!(state.is_active(ToolbarTab::Visualizer));
        assert!(!state.is_active(ToolbarTab::Controls));

        assert!(state.select(ToolbarTab::Controls));
        assert!(state.is_active(ToolbarTab::Controls));
        assert!(!state.is_active(ToolbarTab::Visualizer));
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut state = ToolbarState::new(true, false);
        assert!(state.select(ToolbarTab::Visualizer));
        assert!(!state.select(ToolbarTab::Visualizer));
        assert!(state.is_active(ToolbarTab::Visualizer));
    }

    #[test]
    fn test_controls_selection_ignored_without_panel() {
        let mut state = ToolbarState::new(false, false);
        assert!(!state.has_controls());
        assert!(!state.select(ToolbarTab::Controls));
        assert!(state.is_active(ToolbarTab::Visualizer));
    }
}
