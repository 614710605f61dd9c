//! livepad - live HTML/CSS/JavaScript playground
//!
//! This crate provides the core types and logic for the playground,
//! implementing the Elm Architecture pattern: the runtime feeds `Msg`s into
//! `update`, which mutates the `AppModel` and returns `Cmd`s to execute.

pub mod bridge;
pub mod chrome;
pub mod cli;
pub mod commands;
pub mod composer;
pub mod config;
pub mod config_paths;
pub mod debounce;
pub mod fs_watcher;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use composer::{compose, export_document, ComposedDocument};
pub use config::PlaygroundConfig;
pub use messages::Msg;
pub use model::AppModel;
