//! File system watching for seed files passed with `--watch`
//!
//! Uses the `notify` crate with debouncing. Parent directories are watched
//! rather than the files themselves so that editors which save by
//! replacing the file (write to temp, rename over) are still picked up.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};

use crate::model::BufferKind;

/// Watches the source files backing each buffer
pub struct SourceWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    /// Receiver for debounced events
    rx: Receiver<Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    files: Vec<(BufferKind, PathBuf)>,
}

impl SourceWatcher {
    /// Start watching `files`.
    ///
    /// Events are debounced by 100ms; the render debounce runs on top of that.
    pub fn new(files: Vec<(BufferKind, PathBuf)>) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(Duration::from_millis(100), tx)?;

        let files: Vec<(BufferKind, PathBuf)> = files
            .into_iter()
            .map(|(kind, path)| (kind, absolute(&path)))
            .collect();

        let mut dirs = HashSet::new();
        for (_, path) in &files {
            if let Some(dir) = path.parent() {
                if dirs.insert(dir.to_path_buf()) {
                    debouncer
                        .watcher()
                        .watch(dir, notify::RecursiveMode::NonRecursive)?;
                    tracing::info!("Watching {}", dir.display());
                }
            }
        }

        Ok(Self {
            _debouncer: debouncer,
            rx,
            files,
        })
    }

    /// Poll for changed buffers (non-blocking)
    ///
    /// Each buffer appears at most once per call.
    pub fn poll_events(&self) -> Vec<(BufferKind, PathBuf)> {
        let mut changed: Vec<(BufferKind, PathBuf)> = Vec::new();

        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    for event in events {
                        if matches!(event.kind, DebouncedEventKind::AnyContinuous) {
                            continue;
                        }
                        let path = absolute(&event.path);
                        for (kind, file) in &self.files {
                            if *file == path && !changed.iter().any(|(k, _)| k == kind) {
                                changed.push((*kind, file.clone()));
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("File system watcher error: {:?}", e);
                }
            }
        }

        if !changed.is_empty() {
            tracing::debug!("Source watcher detected {} changes", changed.len());
        }

        changed
    }
}

/// Canonical path when the file exists, else the path joined onto the cwd
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn reports_changed_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let style = dir.path().join("style.css");
        std::fs::write(&style, "a{}").unwrap();

        let watcher = SourceWatcher::new(vec![(BufferKind::Style, style.clone())]).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        std::fs::write(&style, "b{}").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = Vec::new();
        while seen.is_empty() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(50));
            seen = watcher.poll_events();
        }
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, BufferKind::Style);
    }
}
