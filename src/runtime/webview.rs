//! Webview manager for the chrome and the preview
//!
//! Both are wry child webviews of the main window. The chrome fills the
//! window; the preview sits on top of it, positioned over the slot the
//! chrome reports, and is the isolated execution context for user code.

use std::sync::mpsc::Sender;

use winit::dpi::LogicalSize as WindowLogicalSize;
use winit::window::Window;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::http::Request;
use wry::{Rect, WebView, WebViewBuilder};

use livepad::chrome::decode_action;
use livepad::composer::ComposedDocument;
use livepad::messages::{Msg, PreviewMsg};
use livepad::model::Bounds;

const CHROME_HTML: &str = include_str!("../../assets/chrome.html");

const BLANK_PREVIEW: &str = "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"></head><body></body></html>";

/// Owns the chrome and preview webviews
pub struct WebviewManager {
    chrome: WebView,
    preview: WebView,
}

impl WebviewManager {
    /// Create both webviews as children of `window`.
    ///
    /// IPC from either webview is forwarded to `tx` as messages.
    pub fn new(window: &Window, tx: Sender<Msg>) -> Result<Self, wry::Error> {
        let size: WindowLogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());

        let chrome_tx = tx.clone();
        let chrome = WebViewBuilder::new()
            .with_html(CHROME_HTML)
            .with_bounds(to_wry_rect(full(size), size.height))
            .with_transparent(false)
            .with_devtools(cfg!(debug_assertions))
            .with_navigation_handler(handle_navigation)
            .with_ipc_handler(move |request: Request<String>| {
                match decode_action(request.body()) {
                    Ok(action) => {
                        let _ = chrome_tx.send(action.into_msg());
                    }
                    Err(e) => tracing::warn!("{}", e),
                }
            })
            .build_as_child(window)?;

        // Created second so it stacks above the chrome
        let preview = WebViewBuilder::new()
            .with_html(BLANK_PREVIEW)
            .with_bounds(to_wry_rect(Bounds::default(), size.height))
            .with_visible(false)
            .with_incognito(true)
            .with_devtools(cfg!(debug_assertions))
            .with_navigation_handler(handle_navigation)
            .with_ipc_handler(move |request: Request<String>| {
                let _ = tx.send(Msg::Preview(PreviewMsg::Ipc(request.into_body())));
            })
            .build_as_child(window)?;

        Ok(Self { chrome, preview })
    }

    /// Hand a view snapshot script to the chrome
    pub fn push_snapshot(&self, script: &str) {
        if let Err(e) = self.chrome.evaluate_script(script) {
            tracing::warn!("Failed to push snapshot to chrome: {}", e);
        }
    }

    /// Replace the preview document.
    ///
    /// The previous document's realm is abandoned, not torn down; anything it
    /// still sends carries the old generation.
    pub fn load_preview(&self, document: &ComposedDocument) -> Result<(), wry::Error> {
        self.preview.load_html(&document.html)
    }

    /// Position the preview over `bounds`, or hide it.
    ///
    /// `window_height` is the window's logical height, needed to flip the
    /// origin on macOS.
    pub fn place_preview(&self, bounds: Option<Bounds>, window_height: f64) {
        let result = match bounds {
            Some(b) => self
                .preview
                .set_bounds(to_wry_rect(b, window_height))
                .and_then(|_| self.preview.set_visible(true)),
            None => self.preview.set_visible(false),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to place preview: {}", e);
        }
    }

    /// Stretch the chrome over the whole window
    pub fn resize_chrome(&self, size: WindowLogicalSize<f64>) {
        if let Err(e) = self.chrome.set_bounds(to_wry_rect(full(size), size.height)) {
            tracing::warn!("Failed to resize chrome: {}", e);
        }
    }
}

/// External links open in the default browser; everything else stays put
fn handle_navigation(url: String) -> bool {
    if url.starts_with("http://") || url.starts_with("https://") {
        tracing::debug!("Opening external link: {}", url);
        let _ = open::that(&url);
        false
    } else {
        true
    }
}

fn full(size: WindowLogicalSize<f64>) -> Bounds {
    Bounds {
        x: 0.0,
        y: 0.0,
        width: size.width,
        height: size.height,
    }
}

/// Chrome coordinates are CSS pixels with a top-left origin, the same units
/// as wry's logical bounds. Child views on macOS are placed from the
/// bottom-left of the parent, so y is flipped there.
fn to_wry_rect(bounds: Bounds, window_height: f64) -> Rect {
    let y = if cfg!(target_os = "macos") {
        flip_y(bounds, window_height)
    } else {
        bounds.y
    };
    Rect {
        position: LogicalPosition::new(bounds.x, y).into(),
        size: LogicalSize::new(bounds.width, bounds.height).into(),
    }
}

/// Distance from the bottom of the window to the bottom of `bounds`
fn flip_y(bounds: Bounds, window_height: f64) -> f64 {
    window_height - (bounds.y + bounds.height)
}
