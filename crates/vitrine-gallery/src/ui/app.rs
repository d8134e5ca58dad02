//! Main iced application for the Vitrine gallery
//!
//! Manages:
//! - The demo under display (controls + preview + state visualizer)
//! - The example toolbar's active tab
//! - Top navigation (version selector, theme toggle, compact drawer)

use std::path::PathBuf;

use iced::widget::{column, container, row, text};
use iced::{Color, Element, Length, Task, Theme};

use vitrine_widgets::{
    controls_view, toolbar, top_nav_view, ControlsState, ToolbarState, TopNavMessage, TopNavState,
};

use crate::config::{self, GalleryConfig};

use super::demos;
use super::message::Message;
use super::theme::accent_from_config;
use super::visualizer;

/// Application state
pub struct GalleryApp {
    /// Loaded configuration
    config: GalleryConfig,
    /// Where the configuration is saved
    config_path: PathBuf,
    /// Active-tab state for the example toolbar
    toolbar: ToolbarState,
    /// Controls for the demo under display
    controls: ControlsState,
    /// Top navigation state
    top_nav: TopNavState,
    /// Index into `config.site.versions`
    current_version: usize,
    /// Dark theme enabled
    dark_mode: bool,
    /// Resolved accent color
    accent: Color,
    /// Status line at the bottom of the window
    status: String,
}

impl GalleryApp {
    /// Create a new application instance from loaded configuration
    pub fn new(config: GalleryConfig, config_path: PathBuf) -> Self {
        let controls = demos::demo_controls();
        // A demo without controls opens on the visualizer; the config flag
        // forces the visualizer even when controls exist.
        let toolbar = ToolbarState::new(
            !controls.is_empty(),
            config.display.start_on_visualizer,
        );
        let dark_mode = config.display.dark_mode;
        let accent = accent_from_config(&config.display.accent);

        Self {
            config,
            config_path,
            toolbar,
            controls,
            top_nav: TopNavState::new(),
            current_version: 0,
            dark_mode,
            accent,
            status: String::new(),
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTab(tab) => {
                self.toolbar.select(tab);
                Task::none()
            }

            Message::Controls(msg) => {
                if self.controls.handle_message(msg) {
                    log::debug!("controls: demo inputs changed");
                }
                Task::none()
            }

            Message::TopNav(msg) => {
                if self.top_nav.handle_message(&msg) {
                    self.handle_nav_action(msg)
                } else {
                    Task::none()
                }
            }

            Message::ConfigSaved(Ok(())) => {
                self.status = "Settings saved".to_string();
                Task::none()
            }
            Message::ConfigSaved(Err(e)) => {
                log::warn!("config save failed: {}", e);
                self.status = format!("Save failed: {}", e);
                Task::none()
            }
        }
    }

    /// Apply a top-nav action the bar reported back to the host
    fn handle_nav_action(&mut self, msg: TopNavMessage) -> Task<Message> {
        match msg {
            TopNavMessage::SelectVersion(index) => {
                if index < self.config.site.versions.len() {
                    self.current_version = index;
                    self.status =
                        format!("Showing docs for {}", self.config.site.versions[index]);
                }
                Task::none()
            }
            TopNavMessage::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                self.config.display.dark_mode = self.dark_mode;
                self.save_config_task()
            }
            TopNavMessage::OpenLink(url) => {
                // No in-app browser; surface the target instead
                log::info!("external link activated: {}", url);
                self.status = format!("Open {} in your browser", url);
                Task::none()
            }
            _ => Task::none(),
        }
    }

    /// Persist the current configuration in the background
    fn save_config_task(&self) -> Task<Message> {
        let config = self.config.clone();
        let path = self.config_path.clone();
        Task::perform(
            async move { config::save_config(&config, &path).map_err(|e| e.to_string()) },
            Message::ConfigSaved,
        )
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let nav = top_nav_view(
            &self.top_nav,
            &self.config.site,
            self.current_version,
            self.dark_mode,
        )
        .map(Message::TopNav);

        let preview = demos::preview(&self.controls, self.accent);

        // The toolbar receives the panels opaque; it only decides which one
        // is visible.
        let controls_panel = if self.controls.is_empty() {
            None
        } else {
            Some(controls_view(&self.controls).map(Message::Controls))
        };
        let side = toolbar(
            &self.toolbar,
            controls_panel,
            visualizer::visualizer_view(self.controls.snapshot_yaml()),
            Message::SelectTab,
        );

        let body = row![
            container(preview)
                .width(Length::FillPortion(3))
                .height(Length::Fill)
                .padding(16),
            container(side)
                .width(Length::FillPortion(2))
                .height(Length::Fill)
                .padding(8),
        ]
        .spacing(8)
        .height(Length::Fill);

        let status_bar = container(text(&self.status).size(11)).padding([4, 12]);

        column![nav, body, status_bar].into()
    }

    /// Theme for iced
    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
