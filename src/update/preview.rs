//! Preview pipeline update handlers
//!
//! Renders, bridge traffic from the preview webview, and load failures.

use std::time::Instant;

use crate::bridge::{self, Dispatch};
use crate::commands::Cmd;
use crate::composer::compose;
use crate::messages::PreviewMsg;
use crate::model::{AppModel, Diagnostic};

pub fn update_preview(model: &mut AppModel, msg: PreviewMsg) -> Option<Cmd> {
    match msg {
        PreviewMsg::Run => Some(render_now(model, Instant::now())),

        PreviewMsg::Ipc(raw) => {
            let envelope = match bridge::decode(&raw) {
                Ok(envelope) => envelope,
                Err(e) => {
                    tracing::warn!("{}", e);
                    return None;
                }
            };
            match bridge::dispatch(&mut model.preview, envelope) {
                Dispatch::Applied => Some(Cmd::Redraw),
                Dispatch::Stale => None,
            }
        }

        PreviewMsg::LoadFailed { generation, error } => {
            if generation != model.preview.generation {
                tracing::debug!(
                    "Ignoring load failure for superseded generation {}",
                    generation
                );
                return None;
            }
            tracing::warn!("Preview rejected generation {}: {}", generation, error);
            model.preview.diagnostics.push(Diagnostic::syntax(error));
            Some(Cmd::Redraw)
        }
    }
}

/// Dispatch a render right away.
///
/// Cancels any pending debounced render, starts a new generation (clearing
/// diagnostics and console) and hands the composed document to the runtime.
/// Once returned, the render cannot be called back.
pub fn render_now(model: &mut AppModel, now: Instant) -> Cmd {
    model.render_debounce.cancel();
    let generation = model.preview.begin_render(now);
    let document = compose(&model.sources, generation);
    tracing::debug!(
        generation,
        bytes = document.html.len(),
        revision = model.sources.revision(),
        "composed preview document"
    );
    Cmd::LoadPreview(document)
}
