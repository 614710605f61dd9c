//! UI update handlers (font size, theme, clipboard, export)

use crate::commands::Cmd;
use crate::composer::{export_document, EXPORT_FILE_NAME};
use crate::messages::UiMsg;
use crate::model::AppModel;

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::AdjustFontSize(delta) => {
            if model.settings.adjust_font_size(delta) {
                tracing::debug!("Font size: {}px", model.settings.font_size());
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::ToggleTheme => {
            model.settings.toggle_theme();
            tracing::info!(
                "Theme: {}",
                if model.settings.dark_mode {
                    "dark"
                } else {
                    "light"
                }
            );
            Some(Cmd::Redraw)
        }

        UiMsg::CopyBuffer(buffer) => Some(Cmd::CopyToClipboard {
            buffer,
            text: model.sources.get(buffer).to_string(),
        }),

        UiMsg::Export => Some(Cmd::ExportDocument {
            file_name: EXPORT_FILE_NAME,
            html: export_document(&model.sources),
        }),
    }
}
