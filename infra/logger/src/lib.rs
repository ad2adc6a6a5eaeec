//! # Logger
//!
//! Installs the global `tracing` subscriber for native builds: a compact console
//! layer plus an optional daily-rolling file layer written through a
//! non-blocking worker. The browser build logs through Dioxus instead.
//!
//! `RUST_LOG` is honored when no explicit directive is configured.
//!
//! ## Example
//!
//! ```rust
//! use folio_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("folio").level(LevelFilter::DEBUG).init().unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use folio_domain::config::LoggingConfig;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const MAX_LOG_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Configures and installs the global subscriber.
#[derive(Debug)]
#[must_use = "The builder does nothing until `init` is called"]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    directive: Option<String>,
    directory: Option<PathBuf>,
    json: bool,
}

impl LoggerBuilder {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter such as `folio_navigation=debug,info`.
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = Some(directive.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Also write daily-rolling files named `<name>.<date>.log` into `directory`.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Write the file layer as JSON lines. Has no effect without a directory.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Applies the `[logging]` section of the site configuration.
    ///
    /// An absent `level` leaves the filter to `RUST_LOG`.
    pub fn with_config(mut self, config: &LoggingConfig) -> Self {
        if let Some(level) = &config.level {
            self = self.directive(level.clone());
        }
        if let Some(dir) = &config.directory {
            self = self.directory(dir.clone());
        }
        self.json(config.json)
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive; dropping it stops the file worker.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a bad directive,
    ///   or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the file sink cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if !self.console && self.directory.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled. Enable the console or set a directory.".into(),
                context: None,
            });
        }

        let filter = self.env_filter()?;
        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.directory {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .context(format!("Failed to create {}", dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(MAX_LOG_FILES)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(name = %self.name, "Logger initialized");

        Ok(Logger { guard })
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directive {
            None => Ok(builder.from_env_lossy()),
            Some(directive) => {
                builder.parse(directive).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid filter '{directive}': {e}").into(),
                    context: None,
                })
            },
        }
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder. `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            directive: None,
            directory: None,
            json: false,
        }
    }

    /// Whether a file worker is running.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("folio-test");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.directive.is_none());
        assert!(builder.directory.is_none());
        assert!(!builder.json);
    }

    #[test]
    fn config_section_is_applied() {
        let config = LoggingConfig {
            level: Some("folio_navigation=debug".to_owned()),
            directory: Some(PathBuf::from("logs")),
            json: true,
        };
        let builder = Logger::builder("folio-test").with_config(&config);
        assert_eq!(builder.directive.as_deref(), Some("folio_navigation=debug"));
        assert_eq!(builder.directory.as_deref(), Some(std::path::Path::new("logs")));
        assert!(builder.json);
    }

    #[test]
    fn default_config_leaves_filter_to_environment() {
        let builder = Logger::builder("folio-test").with_config(&LoggingConfig::default());
        assert!(builder.directive.is_none());
        assert!(builder.directory.is_none());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder("  ").init().expect_err("empty name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_output_is_rejected() {
        let err = Logger::builder("folio-test").console(false).init().expect_err("no output");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn bad_directive_is_rejected() {
        let err =
            Logger::builder("folio-test").directive("folio=verbose").init().expect_err("bad filter");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
