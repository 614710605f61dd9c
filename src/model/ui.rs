//! UI state - transient notifications

use std::time::{Duration, Instant};

use serde::Serialize;

/// Default lifetime of a toast
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Info,
    Error,
}

/// A non-blocking notification that expires on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub expires_at: Instant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastVariant::Info)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastVariant::Error)
    }

    fn new(title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
            expires_at: Instant::now() + TOAST_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub toast: Option<Toast>,
    /// Set once the chrome webview has loaded and can receive snapshots
    pub chrome_ready: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_toast(&mut self, toast: Toast) {
        tracing::debug!("toast: {} - {}", toast.title, toast.description);
        self.toast = Some(toast);
    }

    /// Drops an expired toast. Returns true if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            return true;
        }
        false
    }
}
