//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::composer::ComposedDocument;
use crate::model::{Bounds, BufferKind};

/// Side effects returned by `update` and executed by the runtime
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Push a fresh view snapshot to the chrome
    Redraw,
    /// Replace the preview document, abandoning the previous execution context
    LoadPreview(ComposedDocument),
    /// Move the preview webview into the given slot, or hide it
    PlacePreview(Option<Bounds>),
    /// Write text to the system clipboard
    CopyToClipboard { buffer: BufferKind, text: String },
    /// Ask for a save location and write the exported file there
    ExportDocument {
        file_name: &'static str,
        html: String,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // New generation clears diagnostics and lights the running indicator
            Cmd::LoadPreview(_) => true,
            Cmd::PlacePreview(_) => false,
            // Clipboard and export report back with messages when done
            Cmd::CopyToClipboard { .. } => false,
            Cmd::ExportDocument { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::Quit => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
