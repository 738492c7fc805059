// Configuration loading and parsing (config/client.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Base URL used when no config file is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Path of the config file, relative to the current working directory.
const CONFIG_PATH: &str = "config/client.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Client configuration: where the backend lives and which bearer token to
/// present. Constructed from `config/client.toml` or assembled directly in
/// code (useful for tests).
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL without a trailing slash.
    pub base_url: String,
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CredentialsConfig {
    pub token: Option<String>,
}

/// Raw deserialization target for the entire client.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    server: ServerSection,
    #[serde(default)]
    credentials: CredentialsConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct ServerSection {
    base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let text = read_file(path)?;
        let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Config {
            base_url: file.server.base_url.trim_end_matches('/').to_string(),
            credentials: file.credentials,
        };

        validate(&config)?;

        Ok(config)
    }

    /// Load configuration relative to `base_dir`: `config/client.toml` when
    /// present, `Config::default()` otherwise.
    pub fn load_from_dir(base_dir: &Path) -> Result<Config, ConfigError> {
        let path = base_dir.join(CONFIG_PATH);
        if path.exists() {
            Config::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Convenience wrapper: loads relative to the current working directory.
    pub fn load() -> Result<Config, ConfigError> {
        let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
            path: PathBuf::from("."),
        })?;
        Config::load_from_dir(&cwd)
    }

    /// The configured bearer token, treating an empty string as absent.
    pub fn token(&self) -> Option<&str> {
        self.credentials.token.as_deref().filter(|t| !t.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.base_url.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "server.base_url".into(),
            message: "must not be empty".into(),
        });
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            field: "server.base_url".into(),
            message: format!(
                "must start with http:// or https://, got {}",
                config.base_url
            ),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
