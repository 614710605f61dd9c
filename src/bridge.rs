//! Isolation bridge - the typed channel from the preview webview to the host
//!
//! The preview posts JSON strings over the webview IPC channel. Each one is
//! decoded into an [`Envelope`] and applied by [`dispatch`], the only place
//! that turns preview output into diagnostics or console entries.

use serde::{Deserialize, Serialize};

use crate::model::{ConsoleEntry, Diagnostic, PreviewState};

/// A message emitted by the interception shim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PreviewEvent {
    /// Uncaught error event or exception thrown by the user script
    RuntimeError {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column: Option<u32>,
    },
    /// One `console.log` call, arguments joined by a single space
    ConsoleLog { message: String },
}

/// A preview event tagged with the generation of the document that sent it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub generation: u64,
    #[serde(flatten)]
    pub event: PreviewEvent,
}

/// Errors decoding an IPC payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Not valid JSON, or missing/ill-typed fields
    Malformed(String),
    /// Valid JSON with a `type` we don't know
    UnknownKind(String),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::Malformed(e) => write!(f, "Malformed preview message: {}", e),
            BridgeError::UnknownKind(k) => write!(f, "Unknown preview message type: {}", k),
        }
    }
}

impl std::error::Error for BridgeError {}

const KNOWN_KINDS: [&str; 2] = ["runtime-error", "console-log"];

/// Decode a raw IPC string from the preview
pub fn decode(raw: &str) -> Result<Envelope, BridgeError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| BridgeError::Malformed(e.to_string()))?;

    if let Some(kind) = value.get("type").and_then(|t| t.as_str()) {
        if !KNOWN_KINDS.contains(&kind) {
            return Err(BridgeError::UnknownKind(kind.to_string()));
        }
    }

    let mut envelope: Envelope =
        serde_json::from_value(value).map_err(|e| BridgeError::Malformed(e.to_string()))?;

    // Browsers report 0 when the position is unknown
    if let PreviewEvent::RuntimeError { line, column, .. } = &mut envelope.event {
        *line = line.filter(|&l| l > 0);
        *column = column.filter(|&c| c > 0);
    }

    Ok(envelope)
}

/// Outcome of dispatching one envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    /// Sent by a document that has since been replaced
    Stale,
}

/// Apply an envelope to the preview state.
///
/// Messages from any generation other than the current one are dropped.
pub fn dispatch(preview: &mut PreviewState, envelope: Envelope) -> Dispatch {
    if envelope.generation != preview.generation {
        preview.stale_dropped += 1;
        tracing::debug!(
            "Dropping stale preview message: generation {} != current {}",
            envelope.generation,
            preview.generation
        );
        return Dispatch::Stale;
    }

    match envelope.event {
        PreviewEvent::RuntimeError {
            message,
            line,
            column,
        } => {
            tracing::debug!(?line, ?column, "preview runtime error: {}", message);
            preview
                .diagnostics
                .push(Diagnostic::runtime(message, line, column));
        }
        PreviewEvent::ConsoleLog { message } => {
            tracing::info!(target: "preview", "{}", message);
            preview.console.push(ConsoleEntry { message });
        }
    }
    Dispatch::Applied
}
