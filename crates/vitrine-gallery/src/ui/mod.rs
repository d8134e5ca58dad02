//! UI module for the Vitrine gallery
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! Widget state lives in vitrine-widgets; this module wires it into the
//! application message loop.

pub mod app;
pub mod demos;
pub mod message;
pub mod theme;
pub mod visualizer;

pub use app::GalleryApp;
pub use message::Message;
