//! Configuration loading
//!
//! Precedence, lowest to highest: built-in defaults, the config file at
//! `~/.config/tagmint/config.toml`, environment variables, CLI flags (the
//! last applied by the binary). Environment lookup is injected as a closure
//! so tests never touch the process environment.

use std::fs;
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{Config, DEFAULT_MODEL, DEFAULT_MODEL_URL, DEFAULT_TIMEOUT_SECS, ModelConfig};

use crate::error::TagmintError;

/// Environment variable overriding the model endpoint base URL
pub const ENV_MODEL_URL: &str = "TAGMINT_MODEL_URL";

/// Environment variable overriding the model identifier
pub const ENV_MODEL: &str = "TAGMINT_MODEL";

/// Environment variable overriding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "TAGMINT_MODEL_TIMEOUT_SECS";

/// Default config file location (`~/.config/tagmint/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagmint").join("config.toml"))
}

/// Load configuration and apply overrides from the process environment.
///
/// An explicit `path` must exist and parse; the default location is only
/// read when present.
pub fn load(path: Option<&Path>) -> Result<Config, TagmintError> {
    let config = match path {
        Some(explicit) => read_file(explicit)?,
        None => match default_config_path() {
            Some(default) if default.exists() => read_file(&default)?,
            _ => Config::default(),
        },
    };

    apply_env(config, |name| std::env::var(name).ok())
}

fn read_file(path: &Path) -> Result<Config, TagmintError> {
    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| TagmintError::Config(format!("{}: {e}", path.display())))
}

/// Apply environment overrides through the given lookup.
///
/// Blank values are ignored. A timeout that is not a number is a config
/// error rather than a silent default.
pub fn apply_env(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, TagmintError> {
    if let Some(url) = non_blank(lookup(ENV_MODEL_URL)) {
        config.model.url = url;
    }

    if let Some(model) = non_blank(lookup(ENV_MODEL)) {
        config.model.model = model;
    }

    if let Some(secs) = non_blank(lookup(ENV_TIMEOUT_SECS)) {
        config.model.timeout_secs = secs.parse().map_err(|_| {
            TagmintError::Config(format!(
                "invalid {ENV_TIMEOUT_SECS}={secs:?} (expected whole seconds)"
            ))
        })?;
    }

    Ok(config)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
