//! App message handlers (ticks, chrome lifecycle, async results)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Toast};

use super::{combine, preview::render_now};

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Tick(now) => {
            let mut cmds = Vec::new();
            if model.render_debounce.fire_if_due(now) {
                cmds.push(render_now(model, now));
            }
            let settled = model.preview.settle(now);
            let expired = model.ui.expire_toast(now);
            if settled || expired {
                cmds.push(Cmd::Redraw);
            }
            combine(cmds)
        }

        AppMsg::ChromeReady => {
            model.ui.chrome_ready = true;
            tracing::debug!("Chrome ready");
            Some(Cmd::Redraw)
        }

        AppMsg::CopyCompleted { buffer, result } => {
            let toast = match result {
                Ok(()) => Toast::info(
                    "Copied!",
                    format!("{} code copied to clipboard.", buffer.label()),
                ),
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {}", e);
                    Toast::error("Copy failed", "Unable to copy to clipboard.")
                }
            };
            model.ui.show_toast(toast);
            Some(Cmd::Redraw)
        }

        AppMsg::ExportCompleted(result) => {
            let toast = match result {
                Ok(Some(path)) => {
                    tracing::info!("Exported to {}", path.display());
                    Toast::info(
                        "Download Complete",
                        format!("Your code has been saved to {}.", path.display()),
                    )
                }
                Ok(None) => return None,
                Err(e) => {
                    tracing::warn!("Export failed: {}", e);
                    Toast::error("Export failed", e)
                }
            };
            model.ui.show_toast(toast);
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
