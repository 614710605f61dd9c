//! Chrome protocol - the editor UI webview's view of the model
//!
//! The chrome is presentation only. It sends user actions as tagged JSON and
//! receives a [`ViewSnapshot`] after each update; it never owns state.

use serde::{Deserialize, Serialize};

use crate::messages::{AppMsg, LayoutMsg, Msg, PreviewMsg, SourceMsg, UiMsg};
use crate::model::{
    AppModel, Bounds, BufferKind, ConsoleEntry, Diagnostic, LayoutKind, Pane, ToastVariant,
};

/// A user action reported by the chrome
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ChromeAction {
    Ready,
    Edit { buffer: BufferKind, text: String },
    SetLayout { layout: LayoutKind },
    Maximize { pane: Pane },
    SelectTab { pane: Pane },
    FontSize { delta: i32 },
    ToggleTheme,
    Copy { buffer: BufferKind },
    Export,
    Reset,
    Run,
    PreviewBounds { bounds: Option<Bounds> },
}

impl ChromeAction {
    pub fn into_msg(self) -> Msg {
        match self {
            ChromeAction::Ready => Msg::App(AppMsg::ChromeReady),
            ChromeAction::Edit { buffer, text } => Msg::Source(SourceMsg::Edit { buffer, text }),
            ChromeAction::SetLayout { layout } => Msg::Layout(LayoutMsg::SetLayout(layout)),
            ChromeAction::Maximize { pane } => Msg::Layout(LayoutMsg::Maximize(pane)),
            ChromeAction::SelectTab { pane } => Msg::Layout(LayoutMsg::SelectTab(pane)),
            ChromeAction::FontSize { delta } => Msg::Ui(UiMsg::AdjustFontSize(delta)),
            ChromeAction::ToggleTheme => Msg::Ui(UiMsg::ToggleTheme),
            ChromeAction::Copy { buffer } => Msg::Ui(UiMsg::CopyBuffer(buffer)),
            ChromeAction::Export => Msg::Ui(UiMsg::Export),
            ChromeAction::Reset => Msg::Source(SourceMsg::Reset),
            ChromeAction::Run => Msg::Preview(PreviewMsg::Run),
            ChromeAction::PreviewBounds { bounds } => {
                Msg::Layout(LayoutMsg::PreviewBounds(bounds))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    Malformed(String),
}

impl std::fmt::Display for ChromeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChromeError::Malformed(e) => write!(f, "Malformed chrome action: {}", e),
        }
    }
}

impl std::error::Error for ChromeError {}

/// Decode a raw IPC string from the chrome
pub fn decode_action(raw: &str) -> Result<ChromeAction, ChromeError> {
    serde_json::from_str(raw).map_err(|e| ChromeError::Malformed(e.to_string()))
}

/// Buffer texts, only sent when they changed outside the chrome
#[derive(Debug, Clone, Serialize)]
pub struct BufferSnapshot {
    pub markup: String,
    pub style: String,
    pub script: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaneStats {
    pub markup: usize,
    pub style: usize,
    pub script: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutSnapshot {
    pub kind: LayoutKind,
    pub label: &'static str,
    pub focused: Option<Pane>,
    pub active_tab: Pane,
    pub preview_visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastSnapshot {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub view: &'static str,
    pub font_size: u8,
    pub theme: &'static str,
    pub total_lines: usize,
    pub total_chars: usize,
}

/// Everything the chrome needs to draw itself
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffers: Option<BufferSnapshot>,
    pub line_counts: PaneStats,
    pub font_size: u8,
    pub dark_mode: bool,
    pub layout: LayoutSnapshot,
    pub diagnostics: Vec<Diagnostic>,
    pub console: Vec<ConsoleEntry>,
    pub running: bool,
    pub toast: Option<ToastSnapshot>,
    pub status: StatusSnapshot,
}

impl ViewSnapshot {
    pub fn from_model(model: &AppModel, include_buffers: bool) -> Self {
        let sources = &model.sources;
        let settings = &model.settings;
        let layout = &settings.layout;

        let buffers = include_buffers.then(|| BufferSnapshot {
            markup: sources.markup.clone(),
            style: sources.style.clone(),
            script: sources.script.clone(),
        });

        Self {
            buffers,
            line_counts: PaneStats {
                markup: sources.line_count(BufferKind::Markup),
                style: sources.line_count(BufferKind::Style),
                script: sources.line_count(BufferKind::Script),
            },
            font_size: settings.font_size(),
            dark_mode: settings.dark_mode,
            layout: LayoutSnapshot {
                kind: layout.kind(),
                label: layout.kind().label(),
                focused: layout.focused_pane(),
                active_tab: layout.active_tab(),
                preview_visible: layout.preview_visible(),
            },
            diagnostics: model.preview.diagnostics.clone(),
            console: model.preview.console.clone(),
            running: model.preview.is_running(),
            toast: model.ui.toast.as_ref().map(|t| ToastSnapshot {
                title: t.title.clone(),
                description: t.description.clone(),
                variant: t.variant,
            }),
            status: StatusSnapshot {
                view: layout.kind().label(),
                font_size: settings.font_size(),
                theme: if settings.dark_mode { "Dark" } else { "Light" },
                total_lines: sources.total_lines(),
                total_chars: sources.total_chars(),
            },
        }
    }

    /// Script that hands this snapshot to the chrome page
    pub fn to_script(&self) -> Result<String, serde_json::Error> {
        Ok(format!(
            "window.livepad && window.livepad.apply({});",
            serde_json::to_string(self)?
        ))
    }
}
