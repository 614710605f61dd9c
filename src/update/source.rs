//! Source buffer update handlers

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::SourceMsg;
use crate::model::{AppModel, EditOrigin, SourceBundle, Toast};

pub fn update_source(model: &mut AppModel, msg: SourceMsg) -> Option<Cmd> {
    match msg {
        SourceMsg::Edit { buffer, text } => {
            if !model.sources.set(buffer, text, EditOrigin::Chrome) {
                return None;
            }
            model.render_debounce.schedule(Instant::now());
            Some(Cmd::Redraw)
        }

        SourceMsg::Reloaded { buffer, text } => {
            if !model.sources.set(buffer, text, EditOrigin::External) {
                return None;
            }
            tracing::info!("Reloaded {} buffer from disk", buffer.label());
            model.render_debounce.schedule(Instant::now());
            Some(Cmd::Redraw)
        }

        SourceMsg::Reset => {
            model
                .sources
                .replace_all(SourceBundle::starter(), EditOrigin::External);
            model.render_debounce.schedule(Instant::now());
            model.ui.show_toast(Toast::info(
                "Code Reset",
                "Editor has been reset to default template.",
            ));
            Some(Cmd::Redraw)
        }
    }
}
