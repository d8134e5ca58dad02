//! Shared theme constants for the Vitrine gallery chrome
//!
//! Colors and text sizes used across the toolbar, the controls grid and
//! the top navigation. The accent is overridable per-install through
//! the gallery config; widgets fall back to these defaults.

use iced::Color;

/// Window and panel background
pub const BG_DARK: Color = Color::from_rgb(0.10, 0.10, 0.12);

/// Raised surfaces (tab strip, inactive buttons, pickers)
pub const BG_MEDIUM: Color = Color::from_rgb(0.16, 0.16, 0.19);

/// Top navigation background
pub const BG_HEADER: Color = Color::from_rgb(0.13, 0.13, 0.16);

/// Hairline borders between chrome regions
pub const BORDER_SUBTLE: Color = Color::from_rgb(0.28, 0.28, 0.33);

/// Primary text
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.92, 0.92, 0.92);

/// Secondary text (labels, hints, inactive tabs)
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.62, 0.62, 0.68);

/// Default accent (active tab fill, selected picker items)
pub const ACCENT: Color = Color::from_rgb(0.30, 0.70, 0.90);

/// Label size for nav buttons and tab buttons
pub const NAV_TEXT_SIZE: f32 = 11.0;

/// Label size for control-grid rows
pub const CONTROL_TEXT_SIZE: f32 = 11.0;
