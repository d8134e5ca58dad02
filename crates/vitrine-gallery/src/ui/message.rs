//! Application messages for vitrine-gallery

use vitrine_widgets::{ControlsMessage, ToolbarTab, TopNavMessage};

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Toolbar tab pressed
    SelectTab(ToolbarTab),
    /// Controls property grid message
    Controls(ControlsMessage),
    /// Top navigation message
    TopNav(TopNavMessage),
    /// Background config save completed
    ConfigSaved(Result<(), String>),
}
