use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";
/// Prefix of environment overrides (`FOLIO__WINDOW__TITLE` maps to `window.title`).
pub const ENV_PREFIX: &str = "FOLIO";

/// Error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration structure from an optional file layered with environment overrides.
///
/// 1. **Base File**: `path`, or [`DEFAULT_CONFIG_FILE`] when `None`. A missing file is
///    not an error; every field of the target falls back to its serde default.
/// 2. **Environment Overrides**: variables prefixed with `FOLIO__`, nested with `__`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file exists but cannot be parsed, or if the
/// merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
/// use folio_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(Some("does-not-exist.toml")).unwrap();
/// assert!(cfg.start_page.is_none());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
