//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;
use std::time::Instant;

use crate::model::{Bounds, BufferKind, LayoutKind, Pane};

/// Source buffer messages
#[derive(Debug, Clone)]
pub enum SourceMsg {
    /// Buffer text edited in the chrome
    Edit { buffer: BufferKind, text: String },
    /// Buffer reloaded from a watched file on disk
    Reloaded { buffer: BufferKind, text: String },
    /// Replace all buffers with the starter template
    Reset,
}

/// Preview pipeline messages
#[derive(Debug, Clone)]
pub enum PreviewMsg {
    /// Render immediately, bypassing the debounce
    Run,
    /// Raw IPC payload from the preview webview
    Ipc(String),
    /// The preview webview refused the composed document
    LoadFailed { generation: u64, error: String },
}

/// Layout messages (view mode, focus, tabs)
#[derive(Debug, Clone)]
pub enum LayoutMsg {
    /// Menu selection of a layout mode
    SetLayout(LayoutKind),
    /// Per-pane maximize: enter single-focus on that pane
    Maximize(Pane),
    /// Select a tab in tabbed mode
    SelectTab(Pane),
    /// Chrome reported where the preview slot is (None = not on screen)
    PreviewBounds(Option<Bounds>),
}

/// UI messages (settings, clipboard, export, notifications)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Change the font size by a delta (clamped)
    AdjustFontSize(i32),
    /// Flip light/dark theme
    ToggleTheme,
    /// Copy one buffer to the clipboard
    CopyBuffer(BufferKind),
    /// Export the bundle as a standalone HTML file
    Export,
}

/// Application-level messages (lifecycle and async results)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Periodic tick from the event loop; drives debounce and expiry
    Tick(Instant),
    /// Chrome webview finished loading and wants a full snapshot
    ChromeReady,
    /// Clipboard write finished
    CopyCompleted {
        buffer: BufferKind,
        result: Result<(), String>,
    },
    /// Export finished. `Ok(None)` means the save dialog was cancelled.
    ExportCompleted(Result<Option<PathBuf>, String>),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Buffer edits
    Source(SourceMsg),
    /// Render and bridge traffic
    Preview(PreviewMsg),
    /// Layout/focus state machine
    Layout(LayoutMsg),
    /// Settings and user actions
    Ui(UiMsg),
    /// Lifecycle and async results
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn edit(buffer: BufferKind, text: impl Into<String>) -> Self {
        Msg::Source(SourceMsg::Edit {
            buffer,
            text: text.into(),
        })
    }

    pub fn tick(now: Instant) -> Self {
        Msg::App(AppMsg::Tick(now))
    }

    pub fn ipc(raw: impl Into<String>) -> Self {
        Msg::Preview(PreviewMsg::Ipc(raw.into()))
    }
}
