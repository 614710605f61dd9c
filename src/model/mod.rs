//! Application model - the complete state of the playground
//!
//! Owned by the runtime and mutated only through `update`.

pub mod preview;
pub mod settings;
pub mod sources;
pub mod ui;

pub use preview::{Bounds, ConsoleEntry, Diagnostic, DiagnosticKind, PreviewState};
pub use settings::{
    LayoutKind, LayoutMode, LayoutState, Pane, RenderSettings, DEFAULT_FONT_SIZE, MAX_FONT_SIZE,
    MIN_FONT_SIZE,
};
pub use sources::{BufferKind, EditOrigin, SourceBundle};
pub use ui::{Toast, ToastVariant, UiState};

use std::time::Duration;

use crate::debounce::Debouncer;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    pub sources: SourceBundle,
    pub settings: RenderSettings,
    pub preview: PreviewState,
    pub ui: UiState,
    /// Pending re-render after buffer edits
    pub render_debounce: Debouncer,
}

impl AppModel {
    pub fn new(sources: SourceBundle, settings: RenderSettings, debounce: Duration) -> Self {
        Self {
            sources,
            settings,
            preview: PreviewState::default(),
            ui: UiState::new(),
            render_debounce: Debouncer::new(debounce),
        }
    }
}

impl AppModel {
    /// Where the preview webview should sit, or None when it is off screen
    pub fn preview_placement(&self) -> Option<Bounds> {
        if self.settings.layout.preview_visible() {
            self.preview.bounds
        } else {
            None
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            sources: SourceBundle::default(),
            settings: RenderSettings::default(),
            preview: PreviewState::default(),
            ui: UiState::new(),
            render_debounce: Debouncer::default(),
        }
    }
}
