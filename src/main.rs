use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use livepad::cli::CliArgs;
use livepad::config::PlaygroundConfig;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let _log_guard = livepad::tracing::init();

    let args = CliArgs::parse();
    let startup = args
        .into_config(PlaygroundConfig::load())
        .map_err(anyhow::Error::msg)?;

    tracing::info!(
        "Starting livepad ({}, {}px, debounce {:?})",
        startup.settings.layout.kind().label(),
        startup.settings.font_size(),
        startup.debounce
    );

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
