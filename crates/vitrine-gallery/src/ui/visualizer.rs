//! State visualizer panel
//!
//! Shows the demo's current input values as a YAML snapshot, the gallery
//! equivalent of a state-machine inspector.

use iced::widget::{column, scrollable, text};
use iced::{Element, Font, Length};

use vitrine_widgets::TEXT_SECONDARY;

use super::message::Message;

/// Render the state snapshot panel
pub fn visualizer_view<'a>(yaml: String) -> Element<'a, Message> {
    let heading = text("state").size(10).color(TEXT_SECONDARY);
    let body = text(yaml).size(11).font(Font::MONOSPACE);

    scrollable(column![heading, body].spacing(6).width(Length::Fill))
        .height(Length::Fill)
        .into()
}
