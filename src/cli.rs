//! Command-line argument parsing
//!
//! Supports:
//! - Seeding the buffers from files
//! - Overriding config defaults (layout, theme, font size, debounce)
//! - Watching the seed files and reloading buffers when they change

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::PlaygroundConfig;
use crate::model::{BufferKind, LayoutKind, RenderSettings, SourceBundle};

/// A live HTML/CSS/JavaScript playground
#[derive(Parser, Debug)]
#[command(
    name = "livepad",
    version,
    about = "A live HTML/CSS/JavaScript playground"
)]
pub struct CliArgs {
    /// Seed the HTML buffer from a file
    #[arg(long, value_name = "FILE")]
    pub markup: Option<PathBuf>,

    /// Seed the CSS buffer from a file
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Seed the JavaScript buffer from a file
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Initial layout: horizontal, vertical, tabs or focus
    #[arg(long, value_name = "MODE")]
    pub layout: Option<LayoutKind>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Initial editor font size (10-24)
    #[arg(long, value_name = "PX")]
    pub font_size: Option<u8>,

    /// Quiet period in milliseconds before the preview re-renders
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Reload buffers when their seed files change on disk
    #[arg(short = 'w', long)]
    pub watch: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub sources: SourceBundle,
    pub settings: RenderSettings,
    pub debounce: Duration,
    /// Files to watch, empty unless `--watch` was given
    pub watched: Vec<(BufferKind, PathBuf)>,
}

impl CliArgs {
    /// Files given on the command line, by buffer
    pub fn seed_files(&self) -> Vec<(BufferKind, PathBuf)> {
        [
            (BufferKind::Markup, &self.markup),
            (BufferKind::Style, &self.style),
            (BufferKind::Script, &self.script),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.clone().map(|p| (kind, p)))
        .collect()
    }

    /// Merge CLI flags over `base` and read any seed files
    pub fn into_config(self, base: PlaygroundConfig) -> Result<StartupConfig, String> {
        let seeds = self.seed_files();

        if self.watch && seeds.is_empty() {
            return Err("--watch needs at least one of --markup, --style, --script".to_string());
        }

        // With any seed file given, unseeded buffers start empty rather than
        // showing the welcome sample next to the user's own code
        let mut sources = if seeds.is_empty() {
            SourceBundle::welcome()
        } else {
            SourceBundle::new("", "", "")
        };

        for (kind, path) in &seeds {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            match kind {
                BufferKind::Markup => sources.markup = text,
                BufferKind::Style => sources.style = text,
                BufferKind::Script => sources.script = text,
            }
        }

        let config = PlaygroundConfig {
            font_size: self.font_size.unwrap_or(base.font_size),
            dark_mode: self.dark || base.dark_mode,
            layout: self.layout.unwrap_or(base.layout),
            debounce_ms: self.debounce_ms.unwrap_or(base.debounce_ms),
        };

        Ok(StartupConfig {
            sources,
            settings: config.render_settings(),
            debounce: config.debounce(),
            watched: if self.watch { seeds } else { Vec::new() },
        })
    }
}
