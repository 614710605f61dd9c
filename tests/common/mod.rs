//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use livepad::commands::Cmd;
use livepad::messages::Msg;
use livepad::model::{AppModel, LayoutKind, RenderSettings, SourceBundle};
use livepad::update::update;

/// Debounce used by test models
pub const TEST_DEBOUNCE: Duration = Duration::from_millis(500);

/// Create a test model with the given buffers and default settings
pub fn test_model(markup: &str, style: &str, script: &str) -> AppModel {
    AppModel::new(
        SourceBundle::new(markup, style, script),
        RenderSettings::default(),
        TEST_DEBOUNCE,
    )
}

/// Create a test model starting in the given layout
pub fn test_model_with_layout(kind: LayoutKind) -> AppModel {
    AppModel::new(
        SourceBundle::new("", "", ""),
        RenderSettings::new(14, false, kind),
        TEST_DEBOUNCE,
    )
}

/// Run one message through update and flatten the resulting commands
pub fn run(model: &mut AppModel, msg: Msg) -> Vec<Cmd> {
    update(model, msg).map(Cmd::into_vec).unwrap_or_default()
}

/// Tick far enough past the debounce window that any pending render fires
pub fn tick_past_debounce(model: &mut AppModel) -> Vec<Cmd> {
    run(model, Msg::tick(Instant::now() + TEST_DEBOUNCE * 2))
}

/// Number of preview loads among `cmds`
pub fn load_count(cmds: &[Cmd]) -> usize {
    cmds.iter()
        .filter(|c| matches!(c, Cmd::LoadPreview(_)))
        .count()
}

/// Render the current buffers and return the new generation
pub fn render(model: &mut AppModel) -> u64 {
    run(model, Msg::Preview(livepad::messages::PreviewMsg::Run));
    model.preview.generation
}

/// Bridge payload for a runtime error raised in `generation`
pub fn runtime_error(generation: u64, message: &str, line: u32, column: u32) -> Msg {
    Msg::ipc(format!(
        r#"{{"generation":{},"type":"runtime-error","message":"{}","line":{},"column":{}}}"#,
        generation, message, line, column
    ))
}

/// Bridge payload for a console log in `generation`
pub fn console_log(generation: u64, message: &str) -> Msg {
    Msg::ipc(format!(
        r#"{{"generation":{},"type":"console-log","message":"{}"}}"#,
        generation, message
    ))
}
