//! Layout update handlers (view mode, focus, tabs, preview placement)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::AppModel;

use super::combine;

pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::SetLayout(kind) => {
            model.settings.layout.set_kind(kind);
            tracing::info!("Layout: {}", kind.label());
            layout_changed(model)
        }

        LayoutMsg::Maximize(pane) => {
            model.settings.layout.maximize(pane);
            tracing::info!("Focused pane: {:?}", pane);
            layout_changed(model)
        }

        LayoutMsg::SelectTab(pane) => {
            if model.settings.layout.active_tab() == pane {
                return None;
            }
            model.settings.layout.select_tab(pane);
            layout_changed(model)
        }

        LayoutMsg::PreviewBounds(bounds) => {
            let bounds = bounds.filter(|b| !b.is_empty());
            model.preview.bounds = bounds;
            Some(Cmd::PlacePreview(model.preview_placement()))
        }
    }
}

/// The chrome reflows after the snapshot and reports the new slot; until
/// then a preview that just went off screen is hidden right away.
fn layout_changed(model: &mut AppModel) -> Option<Cmd> {
    let mut cmds = vec![Cmd::Redraw];
    if !model.settings.layout.preview_visible() {
        cmds.push(Cmd::PlacePreview(None));
    }
    combine(cmds)
}
