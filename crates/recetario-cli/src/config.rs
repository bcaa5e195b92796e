//! CLI configuration with layered loading.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Config file (`~/.recetario/config.toml`)
//! 3. Environment variables (`RECETARIO_*`)
//! 4. CLI flags (applied by `main`, highest priority)
//!
//! Each layer overrides the previous.

use recetario_types::ErrorCode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default interval between watch polls, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecetarioConfig {
    /// Base URL of the recipe database (`https://…firebaseio.com`).
    pub database_url: Option<String>,

    /// ID token attached to store requests.
    pub auth_token: Option<String>,

    /// Interval between watch polls, in milliseconds.
    pub poll_interval_ms: u64,

    /// Override for the meal catalog API root.
    pub mealdb_base_url: Option<String>,
}

impl Default for RecetarioConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            auth_token: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            mealdb_base_url: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`RecetarioConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An environment variable holds a value of the wrong shape.
    #[error("invalid value for {var}: expected {expected}")]
    InvalidEnvVar {
        var: &'static str,
        expected: &'static str,
    },
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CONFIG_READ",
            Self::Parse { .. } => "CONFIG_PARSE",
            Self::InvalidEnvVar { .. } => "CONFIG_INVALID_ENV_VAR",
        }
    }

    fn is_recoverable(&self) -> bool {
        // All three are fixable by the user editing a file or a var.
        true
    }
}

/// Returns the default config file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".recetario")
        .join("config.toml")
}

/// Layered configuration loader.
///
/// # Example
///
/// ```ignore
/// let config = ConfigLoader::new()
///     .skip_env_vars() // For testing
///     .load()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    skip_file: bool,
    skip_env: bool,
}

impl ConfigLoader {
    /// Creates a loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom config file instead of the default path.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Skips the config file layer.
    #[must_use]
    pub fn skip_config_file(mut self) -> Self {
        self.skip_file = true;
        self
    }

    /// Skips the environment variable layer.
    ///
    /// Useful for testing with deterministic config.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Loads and merges all layers.
    ///
    /// A missing config file is not an error; the file layer is
    /// simply skipped. A present-but-broken file is.
    pub fn load(&self) -> Result<RecetarioConfig, ConfigError> {
        let mut config = RecetarioConfig::default();

        if !self.skip_file {
            let path = self
                .config_path
                .clone()
                .unwrap_or_else(default_config_path);
            if path.exists() {
                config = load_file(&path)?;
            }
        }

        if !self.skip_env {
            apply_env(&mut config, |var| std::env::var(var).ok())?;
        }

        Ok(config)
    }
}

fn load_file(path: &Path) -> Result<RecetarioConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Applies the `RECETARIO_*` layer via a lookup function (injected so
/// tests stay independent of process environment).
fn apply_env(
    config: &mut RecetarioConfig,
    get: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(url) = get("RECETARIO_DATABASE_URL") {
        config.database_url = Some(url);
    }
    if let Some(token) = get("RECETARIO_AUTH_TOKEN") {
        config.auth_token = Some(token);
    }
    if let Some(raw) = get("RECETARIO_POLL_INTERVAL_MS") {
        config.poll_interval_ms = raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
            var: "RECETARIO_POLL_INTERVAL_MS",
            expected: "milliseconds (u64)",
        })?;
    }
    if let Some(url) = get("RECETARIO_MEALDB_BASE_URL") {
        config.mealdb_base_url = Some(url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = RecetarioConfig::default();
        assert_eq!(config.database_url, None);
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let config = ConfigLoader::new()
            .with_config_path("/definitely/not/a/real/config.toml")
            .skip_env_vars()
            .load()
            .unwrap();
        assert_eq!(config, RecetarioConfig::default());
    }

    #[test]
    fn file_layer_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database_url = \"https://db.example.com\"\npoll_interval_ms = 500"
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_config_path(file.path())
            .skip_env_vars()
            .load()
            .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("https://db.example.com"));
        assert_eq!(config.poll_interval_ms, 500);
    }

    #[test]
    fn broken_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database_url = [not toml]").unwrap();

        let err = ConfigLoader::new()
            .with_config_path(file.path())
            .skip_env_vars()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "databse_url = \"typo\"").unwrap();

        let err = ConfigLoader::new()
            .with_config_path(file.path())
            .skip_env_vars()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_layer_overrides_file_values() {
        let mut config = RecetarioConfig {
            database_url: Some("https://from-file".into()),
            ..RecetarioConfig::default()
        };

        apply_env(&mut config, |var| match var {
            "RECETARIO_DATABASE_URL" => Some("https://from-env".into()),
            "RECETARIO_POLL_INTERVAL_MS" => Some("250".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("https://from-env"));
        assert_eq!(config.poll_interval_ms, 250);
    }

    #[test]
    fn bad_env_number_is_an_error() {
        let mut config = RecetarioConfig::default();
        let err = apply_env(&mut config, |var| {
            (var == "RECETARIO_POLL_INTERVAL_MS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { .. }));
    }
}
