//! Messages for the top navigation bar

/// Messages emitted by the top navigation
#[derive(Debug, Clone)]
pub enum TopNavMessage {
    /// Toggle the version selector dropdown
    ToggleVersionPicker,

    /// Pick a documentation version (index into `SiteInfo::versions`)
    SelectVersion(usize),

    /// Toggle the compact-nav drawer
    ToggleCompactNav,

    /// Close the compact-nav drawer
    CloseCompactNav,

    /// Flip light/dark theme (handled by the host)
    ToggleTheme,

    /// External link activated (handled by the host)
    OpenLink(String),
}
