//! View function for the example toolbar

use iced::widget::{button, column, container, row, text};
use iced::{Background, Element, Length};

use crate::button_styles::{tab_active_style, tab_inactive_style};
use crate::theme::{BG_DARK, BORDER_SUBTLE, NAV_TEXT_SIZE};

use super::{ToolbarState, ToolbarTab};

/// Render the example toolbar
///
/// `controls` is the optional controls panel; `visualizer` is the state
/// snapshot panel. Exactly one of the two is composed into the tree, the
/// one whose tab `state` reports active. Tab presses are translated to host
/// messages through `on_select`.
pub fn toolbar<'a, Message: Clone + 'a>(
    state: &ToolbarState,
    controls: Option<Element<'a, Message>>,
    visualizer: Element<'a, Message>,
    on_select: impl Fn(ToolbarTab) -> Message,
) -> Element<'a, Message> {
    let mut nav: Vec<Element<'a, Message>> = Vec::new();
    if state.has_controls() && controls.is_some() {
        nav.push(tab_button(ToolbarTab::Controls, state, &on_select));
    }
    nav.push(tab_button(ToolbarTab::Visualizer, state, &on_select));

    // The active tab decides which region is composed; the same flag drives
    // the button highlight above.
    let content: Element<'a, Message> = match (state.is_active(ToolbarTab::Controls), controls) {
        (true, Some(panel)) => panel,
        _ => visualizer,
    };

    column![
        row(nav).spacing(2),
        container(content)
            .padding(8)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(panel_style),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}

/// Render a single tab button with its active marker
fn tab_button<'a, Message: Clone + 'a>(
    tab: ToolbarTab,
    state: &ToolbarState,
    on_select: &impl Fn(ToolbarTab) -> Message,
) -> Element<'a, Message> {
    let style = if state.is_active(tab) {
        tab_active_style
    } else {
        tab_inactive_style
    };

    button(text(tab.to_string()).size(NAV_TEXT_SIZE))
        .on_press(on_select(tab))
        .padding([4, 10])
        .style(style)
        .into()
}

fn panel_style(_theme: &iced::Theme) -> container::Style {
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
