//! Vitrine component gallery
//!
//! Entry point for the gallery application. It:
//! 1. Loads configuration from the user's config directory
//! 2. Launches the iced GUI application
//!
//! ## Environment
//!
//! - `RUST_LOG`: log filter, default `info`

mod config;
mod ui;

use iced::{Size, Task};

use ui::{GalleryApp, Message};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("vitrine-gallery starting up");

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Vitrine Gallery                          ║");
    println!("║              live component demo workbench                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    // Run the iced application using the functional API
    let result = iced::application(
        move || {
            (
                GalleryApp::new(config.clone(), config_path.clone()),
                Task::none(),
            )
        },
        update,
        view,
    )
    .theme(theme)
    .title("Vitrine Gallery")
    .window_size(Size::new(1100.0, 760.0))
    .run();

    println!("Vitrine Gallery stopped.");

    result
}

/// Update function for iced
fn update(app: &mut GalleryApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &GalleryApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Theme function for iced
fn theme(app: &GalleryApp) -> iced::Theme {
    app.theme()
}
