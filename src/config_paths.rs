//! Where livepad looks for its config file and writes its logs
//!
//! ```text
//! <root>/config.yaml   startup defaults, read-only
//! <root>/logs/         daily-rotated livepad.log
//! ```
//!
//! `<root>` is `$XDG_CONFIG_HOME/livepad` or `~/.config/livepad` on Unix and
//! macOS, and the roaming app-data folder on Windows.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "livepad";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// The livepad config root and the files under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// Resolve the per-user root, or None when no home directory is known
    pub fn discover() -> Option<Self> {
        user_config_base().map(|base| Self::under(&base))
    }

    /// Paths rooted at `<base>/livepad`
    pub fn under(base: &Path) -> Self {
        Self {
            root: base.join(APP_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }
}

#[cfg(target_os = "windows")]
fn user_config_base() -> Option<PathBuf> {
    dirs::config_dir()
}

// Also used on macOS, in place of ~/Library/Application Support
#[cfg(not(target_os = "windows"))]
fn user_config_base() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}
