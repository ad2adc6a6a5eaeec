use serde::Deserialize;
use std::path::PathBuf;

/// Top-level site configuration for the native shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    /// Fragment the in-memory location starts with (deep link).
    pub start_page: Option<String>,
}

/// Desktop window geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Console and file logging knobs.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive. When absent, `RUST_LOG` applies, then `info`.
    pub level: Option<String>,
    /// Directory for rolling log files. Console only when absent.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Clinton's Portfolio".to_owned(), width: 1200.0, height: 800.0 }
    }
}
