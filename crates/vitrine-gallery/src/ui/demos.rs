//! The demo under display
//!
//! One registered demo for now: a Badge component whose inputs are edited
//! through the controls panel. The preview re-renders from the control
//! values on every change; the state visualizer shows the same values as a
//! YAML snapshot.

use iced::widget::{column, container, text, Space};
use iced::{Background, Border, Color, Element, Length};

use vitrine_widgets::{ControlsState, TEXT_SECONDARY};

use super::message::Message;

/// Controls declared by the Badge demo
pub fn demo_controls() -> ControlsState {
    ControlsState::new()
        .with_text("label", "beta")
        .with_select("size", &["sm", "md", "lg"], 1)
        .with_bool("outlined", false)
        .with_number("corner radius", 4.0, 0.0, 12.0, 1.0)
}

/// Render the live preview of the demoed component
pub fn preview<'a>(controls: &'a ControlsState, accent: Color) -> Element<'a, Message> {
    let label = controls.text_value("label");
    let outlined = controls.bool_value("outlined");
    let radius = controls.number_value("corner radius");
    let size = match controls.selected_option("size").unwrap_or("md") {
        "sm" => 11.0,
        "lg" => 18.0,
        _ => 14.0,
    };

    let badge_text = if outlined {
        text(label).size(size).color(accent)
    } else {
        text(label).size(size).color(Color::WHITE)
    };

    let badge = container(badge_text)
        .padding([4, 12])
        .style(move |_theme: &iced::Theme| container::Style {
            background: if outlined {
                None
            } else {
                Some(Background::Color(accent))
            },
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius.into(),
            },
            ..Default::default()
        });

    column![
        text("Badge").size(20),
        text("A small status descriptor for UI elements.")
            .size(12)
            .color(TEXT_SECONDARY),
        Space::new().height(24),
        badge,
    ]
    .spacing(8)
    .width(Length::Fill)
    .into()
}
