//! Button styling for the Vitrine gallery chrome
//!
//! Flat styles shared by the toolbar tabs and the top navigation:
//! - Tab buttons: accent fill when active, muted surface otherwise
//! - Icon buttons: transparent until hovered (theme toggle, external links)
//! - Link buttons: text-only section links

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color};

use crate::theme::{ACCENT, BG_MEDIUM, TEXT_PRIMARY, TEXT_SECONDARY};

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Style for the active tab button (accent fill, stays put on hover)
pub fn tab_active_style(_theme: &iced::Theme, _status: Status) -> Style {
    Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

/// Style for inactive tab buttons (muted surface, lightens on hover)
pub fn tab_inactive_style(_theme: &iced::Theme, status: Status) -> Style {
    let background = match status {
        Status::Hovered | Status::Pressed => lighten(BG_MEDIUM, 0.06),
        _ => BG_MEDIUM,
    };
    Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_SECONDARY,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

/// Style for icon buttons in the top navigation
pub fn icon_button_style(_theme: &iced::Theme, status: Status) -> Style {
    let background = match status {
        Status::Hovered | Status::Pressed => Some(Background::Color(BG_MEDIUM)),
        _ => None,
    };
    Style {
        background,
        text_color: TEXT_PRIMARY,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

/// Style for text-only section links
pub fn link_button_style(_theme: &iced::Theme, status: Status) -> Style {
    let text_color = match status {
        Status::Hovered | Status::Pressed => TEXT_PRIMARY,
        _ => TEXT_SECONDARY,
    };
    Style {
        background: None,
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}
