//! Shared UI widgets for the Vitrine component gallery
//!
//! This crate provides the reusable iced widgets that make up the gallery
//! chrome: the example toolbar, the controls property grid, and the site
//! top navigation bar.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: Pure data (`ToolbarState`, `ControlsState`, `TopNavState`)
//! - **Message enums**: Per-widget input (`ControlsMessage`, `TopNavMessage`)
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//!
//! ## Widgets
//!
//! - `toolbar`: two-tab panel switcher (Controls / Visualizer) for demos
//! - `controls_view`: typed property grid editing a demo's inputs
//! - `top_nav_view`: site header with version selector and theme toggle

pub mod button_styles;
pub mod controls;
pub mod theme;
pub mod toolbar;
pub mod top_nav;

// Re-export commonly used items
pub use controls::{controls_view, ControlSpec, ControlValue, ControlsMessage, ControlsState};
pub use theme::{ACCENT, BG_DARK, BG_HEADER, BG_MEDIUM, BORDER_SUBTLE, TEXT_PRIMARY, TEXT_SECONDARY};
pub use toolbar::{toolbar, ToolbarState, ToolbarTab};
pub use top_nav::{top_nav_view, SiteInfo, TopNavMessage, TopNavState, SECTION_LINKS};
