//! Logging setup
//!
//! Two sinks:
//! - the terminal, filtered by `RUST_LOG`. By default only warnings plus the
//!   preview's relayed `console.log` output (target `preview`) are shown.
//! - `<config>/logs/livepad.log`, rotated daily, at debug level. Writes go
//!   through a background worker so logging never blocks the event loop.
//!
//! Useful filters:
//! - `RUST_LOG=render=debug` - every render dispatch with its generation
//! - `RUST_LOG=message=debug` - every message entering `update`
//! - `RUST_LOG=preview=off` - silence relayed console output

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::ConfigPaths;

/// Console filter used when `RUST_LOG` is unset
pub const DEFAULT_CONSOLE_FILTER: &str = "warn,preview=info";

const LOG_FILE_PREFIX: &str = "livepad.log";

/// Install the global subscriber.
///
/// The returned guard flushes the log file when dropped; keep it alive for
/// the whole run. Returns None when file logging could not be set up.
pub fn init() -> Option<WorkerGuard> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    let (file_layer, guard) = match open_log_file() {
        Ok((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("livepad: file logging disabled: {}", e);
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn open_log_file() -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), String> {
    let logs = ConfigPaths::discover()
        .ok_or_else(|| "no home directory".to_string())?
        .logs_dir();
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("cannot create {}: {}", logs.display(), e))?;

    let appender = tracing_appender::rolling::daily(&logs, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}
