//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod layout;
mod preview;
mod source;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use layout::update_layout;
pub use preview::{render_now, update_preview};
pub use source::update_source;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Source(m) => source::update_source(model, m),
        Msg::Preview(m) => preview::update_preview(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Collapse a list of commands into one
pub(crate) fn combine(mut cmds: Vec<Cmd>) -> Option<Cmd> {
    cmds.retain(|c| *c != Cmd::None);
    match cmds.len() {
        0 => None,
        1 => cmds.pop(),
        _ => Some(Cmd::batch(cmds)),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Filters out the periodic tick from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::AppMsg;

    let is_noisy = matches!(&msg, Msg::App(AppMsg::Tick(_)));
    if is_noisy {
        return update_inner(model, msg);
    }

    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let generation_before = model.preview.generation;
    let result = update_inner(model, msg);

    if model.preview.generation != generation_before {
        debug!(
            target: "render",
            generation = model.preview.generation,
            "render dispatched"
        );
    }

    result
}

/// Get a display name for a message type
///
/// Buffer text and IPC payloads are summarized by length to keep logs readable.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{PreviewMsg, SourceMsg};

    match msg {
        Msg::Source(SourceMsg::Edit { buffer, text }) => {
            format!("Source::Edit({:?}, {} bytes)", buffer, text.len())
        }
        Msg::Source(SourceMsg::Reloaded { buffer, text }) => {
            format!("Source::Reloaded({:?}, {} bytes)", buffer, text.len())
        }
        Msg::Source(m) => format!("Source::{:?}", m),
        Msg::Preview(PreviewMsg::Ipc(raw)) => format!("Preview::Ipc({} bytes)", raw.len()),
        Msg::Preview(m) => format!("Preview::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
