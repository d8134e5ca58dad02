//! View function for the controls property grid

use iced::widget::{button, column, row, slider, text, text_input, toggler};
use iced::{Alignment, Background, Color, Element, Length};

use crate::theme::{ACCENT, BG_MEDIUM, CONTROL_TEXT_SIZE, TEXT_PRIMARY, TEXT_SECONDARY};

use super::{ControlSpec, ControlValue, ControlsMessage, ControlsState};

/// Render the controls property grid
///
/// One row per declared control: label on the left, a type-appropriate
/// editor on the right.
pub fn controls_view(state: &ControlsState) -> Element<'_, ControlsMessage> {
    let rows: Vec<Element<'_, ControlsMessage>> = state
        .controls()
        .iter()
        .enumerate()
        .map(|(index, spec)| control_row(index, spec))
        .collect();

    column(rows).spacing(10).width(Length::Fill).into()
}

/// Render a single label + editor row
fn control_row(index: usize, spec: &ControlSpec) -> Element<'_, ControlsMessage> {
    let label = text(&spec.label)
        .size(CONTROL_TEXT_SIZE)
        .color(TEXT_SECONDARY)
        .width(Length::Fixed(100.0));

    let editor: Element<'_, ControlsMessage> = match &spec.value {
        ControlValue::Bool(value) => toggler(*value)
            .on_toggle(move |value| ControlsMessage::SetBool { index, value })
            .into(),

        ControlValue::Select { options, selected } => option_buttons(index, options, *selected),

        ControlValue::Number {
            value,
            min,
            max,
            step,
        } => {
            let readout = if *step < 1.0 {
                format!("{:.1}", value)
            } else {
                format!("{:.0}", value)
            };
            row![
                slider(*min..=*max, *value, move |value| {
                    ControlsMessage::SetNumber { index, value }
                })
                .step(*step)
                .width(Length::Fill),
                text(readout).size(CONTROL_TEXT_SIZE).color(TEXT_PRIMARY),
            ]
            .spacing(8)
            .align_y(Alignment::Center)
            .into()
        }

        ControlValue::Text(value) => text_input("", value)
            .on_input(move |value| ControlsMessage::SetText { index, value })
            .size(CONTROL_TEXT_SIZE)
            .into(),
    };

    row![label, editor]
        .spacing(8)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}

/// Render a select control as a row of option buttons
fn option_buttons<'a>(
    index: usize,
    options: &'a [String],
    selected: usize,
) -> Element<'a, ControlsMessage> {
    let buttons: Vec<Element<'a, ControlsMessage>> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == selected {
                option_selected_style
            } else {
                option_style
            };
            button(text(option).size(10))
                .on_press(ControlsMessage::SetSelect { index, option: i })
                .padding([3, 8])
                .style(style)
                .into()
        })
        .collect();

    row(buttons).spacing(2).into()
}

fn option_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(BG_MEDIUM)),
        text_color: TEXT_SECONDARY,
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}

fn option_selected_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
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
