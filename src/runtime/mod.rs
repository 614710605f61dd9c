//! Runtime module - winit/wry platform integration
//!
//! This module contains the platform-specific code for running the playground:
//! - `app` - ApplicationHandler, command execution and the tick loop
//! - `webview` - The chrome and preview webviews

pub mod app;
pub mod webview;

pub use app::App;
