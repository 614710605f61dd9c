use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use livepad::chrome::ViewSnapshot;
use livepad::cli::StartupConfig;
use livepad::commands::Cmd;
use livepad::fs_watcher::SourceWatcher;
use livepad::messages::{AppMsg, Msg, PreviewMsg, SourceMsg};
use livepad::model::AppModel;
use livepad::update::update;

use super::webview::WebviewManager;

/// How often the event loop wakes to drive debounce and expiry
const TICK_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    model: AppModel,
    window: Option<Rc<Window>>,
    webviews: Option<WebviewManager>,
    watcher: Option<SourceWatcher>,
    clipboard: Option<arboard::Clipboard>,
    /// External revision of the buffers last sent to the chrome
    pushed_external_revision: Option<u64>,
    needs_push: bool,
    should_quit: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        let mut model = AppModel::new(startup.sources, startup.settings, startup.debounce);
        // First render goes through the debouncer like any other
        model.render_debounce.schedule(Instant::now());

        let watcher = if startup.watched.is_empty() {
            None
        } else {
            match SourceWatcher::new(startup.watched) {
                Ok(w) => Some(w),
                Err(e) => {
                    tracing::warn!("Could not watch source files: {}", e);
                    None
                }
            }
        };

        Self {
            model,
            window: None,
            webviews: None,
            watcher,
            clipboard: None,
            pushed_external_revision: None,
            needs_push: false,
            should_quit: false,
            msg_tx,
            msg_rx,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        if matches!(msg, Msg::App(AppMsg::ChromeReady)) {
            // A (re)loaded chrome has no buffer contents yet
            self.pushed_external_revision = None;
        }
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.needs_push = true,
            Cmd::LoadPreview(document) => {
                self.needs_push = true;
                let Some(webviews) = &self.webviews else {
                    return;
                };
                if let Err(e) = webviews.load_preview(&document) {
                    let _ = self.msg_tx.send(Msg::Preview(PreviewMsg::LoadFailed {
                        generation: document.generation,
                        error: e.to_string(),
                    }));
                }
            }
            Cmd::PlacePreview(bounds) => {
                if let Some(webviews) = &self.webviews {
                    webviews.place_preview(bounds, self.window_height());
                }
            }
            Cmd::CopyToClipboard { buffer, text } => {
                let result = self.copy_to_clipboard(text);
                let _ = self
                    .msg_tx
                    .send(Msg::App(AppMsg::CopyCompleted { buffer, result }));
            }
            Cmd::ExportDocument { file_name, html } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let path = rfd::FileDialog::new()
                        .set_file_name(file_name)
                        .add_filter("HTML", &["html"])
                        .save_file();

                    let result = match path {
                        Some(path) => std::fs::write(&path, html)
                            .map(|_| Some(path.clone()))
                            .map_err(|e| format!("Failed to write {}: {}", path.display(), e)),
                        None => Ok(None),
                    };
                    let _ = tx.send(Msg::App(AppMsg::ExportCompleted(result)));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Quit => self.should_quit = true,
        }
    }

    fn copy_to_clipboard(&mut self, text: String) -> Result<(), String> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new().map_err(|e| e.to_string())?);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(text).map_err(|e| e.to_string()),
            None => Err("Clipboard unavailable".to_string()),
        }
    }

    /// Logical height of the window, 0 before it exists
    fn window_height(&self) -> f64 {
        self.window.as_ref().map_or(0.0, |window| {
            window
                .inner_size()
                .to_logical::<f64>(window.scale_factor())
                .height
        })
    }

    /// Fit the chrome to the window and re-place the preview
    fn relayout(&self, size: LogicalSize<f64>) {
        if let Some(webviews) = &self.webviews {
            webviews.resize_chrome(size);
            webviews.place_preview(self.model.preview_placement(), size.height);
        }
    }

    fn process_async_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
        }
    }

    fn poll_watcher(&mut self) {
        let Some(watcher) = &self.watcher else {
            return;
        };
        for (buffer, path) in watcher.poll_events() {
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let _ = self
                        .msg_tx
                        .send(Msg::Source(SourceMsg::Reloaded { buffer, text }));
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to reload {} from {}: {}",
                        buffer.label(),
                        path.display(),
                        e
                    );
                }
            }
        }
    }

    /// Send the chrome a snapshot if anything asked for a redraw
    fn push_snapshot(&mut self) {
        if !self.needs_push || !self.model.ui.chrome_ready {
            return;
        }
        let Some(webviews) = &self.webviews else {
            return;
        };

        let external = self.model.sources.external_revision();
        let include_buffers = self.pushed_external_revision != Some(external);

        match ViewSnapshot::from_model(&self.model, include_buffers).to_script() {
            Ok(script) => {
                webviews.push_snapshot(&script);
                if include_buffers {
                    self.pushed_external_revision = Some(external);
                }
                self.needs_push = false;
            }
            Err(e) => tracing::warn!("Failed to serialize view snapshot: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("livepad")
            .with_inner_size(LogicalSize::new(1280, 800));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match WebviewManager::new(&window, self.msg_tx.clone()) {
            Ok(webviews) => self.webviews = Some(webviews),
            Err(e) => {
                tracing::error!("Failed to create webviews: {}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.dispatch(Msg::App(AppMsg::Quit)),
            WindowEvent::Resized(size) => {
                self.relayout(size.to_logical(window.scale_factor()));
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.relayout(window.inner_size().to_logical(scale_factor));
            }
            _ => {}
        }

        if self.should_quit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_watcher();
        self.process_async_messages();

        let now = Instant::now();
        self.dispatch(Msg::tick(now));
        self.push_snapshot();

        if self.should_quit {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(now + TICK_INTERVAL));
    }
}
