//! View function for the top navigation bar

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Color, Element, Length};

use crate::button_styles::{icon_button_style, link_button_style};
use crate::theme::{
    ACCENT, BG_DARK, BG_HEADER, BG_MEDIUM, BORDER_SUBTLE, NAV_TEXT_SIZE, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

use super::{SiteInfo, TopNavMessage, TopNavState, SECTION_LINKS};

/// Render the top navigation bar
///
/// `current_version` indexes `site.versions`; `dark_mode` decides the theme
/// toggle glyph. When the compact drawer is open it renders below the bar.
pub fn top_nav_view<'a>(
    state: &'a TopNavState,
    site: &'a SiteInfo,
    current_version: usize,
    dark_mode: bool,
) -> Element<'a, TopNavMessage> {
    let brand = row![
        text("◇").size(18).color(ACCENT),
        text(&site.name).size(16).color(TEXT_PRIMARY),
        text(&site.tagline).size(10).color(TEXT_SECONDARY),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let left = row![brand, version_selector(state, site, current_version)]
        .spacing(14)
        .align_y(Alignment::Center);

    let links: Vec<Element<'a, TopNavMessage>> =
        SECTION_LINKS.into_iter().map(section_link).collect();

    let actions = row![
        icon_link("GitHub", &site.repo_url),
        icon_link("Discord", &site.chat_url),
        theme_toggle(dark_mode),
        compact_trigger(),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let bar = row![
        left,
        Space::new().width(Length::Fill),
        row(links).spacing(12).align_y(Alignment::Center),
        actions,
    ]
    .spacing(18)
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let header = container(bar)
        .padding([10, 16])
        .width(Length::Fill)
        .style(header_style);

    if state.compact_nav_open {
        column![header, compact_drawer()].into()
    } else {
        header.into()
    }
}

/// Render the version dropdown button and picker
fn version_selector<'a>(
    state: &'a TopNavState,
    site: &'a SiteInfo,
    current_version: usize,
) -> Element<'a, TopNavMessage> {
    let label = site
        .versions
        .get(current_version)
        .map(String::as_str)
        .unwrap_or("dev");

    let dropdown_btn = button(
        row![text(label).size(10), text("▾").size(10)]
            .spacing(4)
            .align_y(Alignment::Center),
    )
    .on_press(TopNavMessage::ToggleVersionPicker)
    .padding([3, 8])
    .style(version_button_style);

    if state.version_picker_open {
        column![dropdown_btn, version_list(site, current_version)]
            .spacing(2)
            .into()
    } else {
        dropdown_btn.into()
    }
}

/// Render the version picker list
fn version_list<'a>(site: &'a SiteInfo, current_version: usize) -> Element<'a, TopNavMessage> {
    let items: Vec<Element<'a, TopNavMessage>> = site
        .versions
        .iter()
        .enumerate()
        .map(|(i, version)| {
            let style = if i == current_version {
                version_item_selected_style
            } else {
                version_item_style
            };
            button(text(version).size(10))
                .on_press(TopNavMessage::SelectVersion(i))
                .padding([3, 8])
                .width(Length::Fill)
                .style(style)
                .into()
        })
        .collect();

    container(column(items).spacing(1).width(Length::Fixed(80.0)))
        .padding(4)
        .style(picker_container_style)
        .into()
}

/// Render a text-only section link
fn section_link(label: &'static str) -> Element<'static, TopNavMessage> {
    button(text(label).size(NAV_TEXT_SIZE))
        .on_press(TopNavMessage::OpenLink(format!(
            "docs/{}",
            label.to_lowercase()
        )))
        .padding([3, 4])
        .style(link_button_style)
        .into()
}

/// Render an external icon link
fn icon_link<'a>(label: &'static str, url: &str) -> Element<'a, TopNavMessage> {
    button(text(label).size(NAV_TEXT_SIZE))
        .on_press(TopNavMessage::OpenLink(url.to_string()))
        .padding([4, 8])
        .style(icon_button_style)
        .into()
}

/// Render the light/dark theme toggle
fn theme_toggle<'a>(dark_mode: bool) -> Element<'a, TopNavMessage> {
    // Shows the mode the press switches to
    let glyph = if dark_mode { "☀" } else { "☾" };
    button(text(glyph).size(14))
        .on_press(TopNavMessage::ToggleTheme)
        .padding([2, 8])
        .style(icon_button_style)
        .into()
}

/// Render the compact-nav trigger
fn compact_trigger<'a>() -> Element<'a, TopNavMessage> {
    button(text("≡").size(16))
        .on_press(TopNavMessage::ToggleCompactNav)
        .padding([2, 8])
        .style(icon_button_style)
        .into()
}

/// Render the compact-nav drawer with the section links stacked vertically
fn compact_drawer<'a>() -> Element<'a, TopNavMessage> {
    let mut items: Vec<Element<'a, TopNavMessage>> = SECTION_LINKS
        .into_iter()
        .map(|label| {
            button(text(label).size(NAV_TEXT_SIZE))
                .on_press(TopNavMessage::OpenLink(format!(
                    "docs/{}",
                    label.to_lowercase()
                )))
                .padding([4, 8])
                .width(Length::Fill)
                .style(link_button_style)
                .into()
        })
        .collect();

    items.push(
        button(text("Close").size(NAV_TEXT_SIZE))
            .on_press(TopNavMessage::CloseCompactNav)
            .padding([4, 8])
            .style(icon_button_style)
            .into(),
    );

    container(column(items).spacing(2).width(Length::Fill))
        .padding(8)
        .width(Length::Fill)
        .style(drawer_style)
        .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Styles
// ─────────────────────────────────────────────────────────────────────────────

fn header_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BG_HEADER)),
        border: iced::Border {
            color: BORDER_SUBTLE,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

fn drawer_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BG_DARK)),
        border: iced::Border {
            color: BORDER_SUBTLE,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

fn picker_container_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BG_DARK)),
        border: iced::Border {
            color: BORDER_SUBTLE,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

fn version_button_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(BG_MEDIUM)),
        text_color: TEXT_PRIMARY,
        border: iced::Border {
            color: BORDER_SUBTLE,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}

fn version_item_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(BG_DARK)),
        text_color: TEXT_PRIMARY,
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}

fn version_item_selected_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}
