//! Preview state - render generation, diagnostics and console output

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// How long the "Running" indicator stays lit after a render dispatch
pub const RUNNING_INDICATOR: Duration = Duration::from_millis(300);

/// Kind of a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// The execution context rejected the composed document
    Syntax,
    /// Uncaught error or thrown exception inside the preview
    Runtime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl Diagnostic {
    pub fn runtime(message: impl Into<String>, line: Option<u32>, column: Option<u32>) -> Self {
        Self {
            kind: DiagnosticKind::Runtime,
            message: message.into(),
            line,
            column,
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Syntax,
            message: message.into(),
            line: None,
            column: None,
        }
    }
}

/// One `console.log` call relayed from the preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleEntry {
    pub message: String,
}

/// Preview pane rectangle in chrome CSS pixels (logical, top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// State of the isolated execution context as seen from the host
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    /// Generation of the document currently loaded (0 = nothing rendered yet)
    pub generation: u64,
    /// Rebuilt on every render, never patched
    pub diagnostics: Vec<Diagnostic>,
    pub console: Vec<ConsoleEntry>,
    /// Messages discarded because they came from an abandoned generation
    pub stale_dropped: u64,
    pub running_until: Option<Instant>,
    /// Last slot reported by the chrome for the preview pane
    pub bounds: Option<Bounds>,
}

impl PreviewState {
    /// Start a new generation, discarding everything from the previous one
    pub fn begin_render(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.diagnostics.clear();
        self.console.clear();
        self.running_until = Some(now + RUNNING_INDICATOR);
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running_until.is_some()
    }

    /// Clears the running flag once it expires. Returns true if it changed.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.running_until {
            Some(until) if now >= until => {
                self.running_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}
