//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::assistant::gemini::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub model_name: String,
    /// May be empty when nothing is configured; the call then fails at the
    /// endpoint and the visitor sees the fallback reply.
    pub api_key: String,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Folio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# model = "gemini-2.0-flash"

# [gemini]
# api_key = "AIza..."               # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com/v1beta"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_model` is from the `--model` flag (None = not specified).
pub fn resolve(config: &FolioConfig, cli_model: Option<&str>) -> ResolvedConfig {
    // Model: CLI → env → config → default
    let model_name = cli_model
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FOLIO_MODEL").ok())
        .or_else(|| config.general.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // API key: env (either name) → config. A missing key is not an error
    // here; the first assistant call simply fails and falls back.
    let api_key = std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("API_KEY"))
        .ok()
        .or_else(|| config.gemini.api_key.clone())
        .unwrap_or_default();
    if api_key.is_empty() {
        warn!("No Gemini API key configured; assistant calls will fail");
    }

    // Base URL: env → config → default
    let base_url = std::env::var("GEMINI_BASE_URL")
        .ok()
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        model_name,
        api_key,
        base_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sparse() {
        let config = FolioConfig::default();
        assert!(config.general.model.is_none());
        assert!(config.gemini.api_key.is_none());
        assert!(config.gemini.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = FolioConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.model_name, DEFAULT_MODEL);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FolioConfig {
            general: GeneralConfig {
                model: Some("my-model".to_string()),
            },
            gemini: GeminiConfig {
                api_key: Some("file-key".to_string()),
                base_url: Some("http://localhost:9999".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.model_name, "my-model");
        assert_eq!(resolved.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_resolve_cli_model_wins() {
        let config = FolioConfig {
            general: GeneralConfig {
                model: Some("from-file".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("from-cli"));
        assert_eq!(resolved.model_name, "from-cli");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
model = "gemini-2.0-flash"

[gemini]
api_key = "test-123"
base_url = "http://192.168.1.100:8080/v1beta"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(config.gemini.api_key.as_deref(), Some("test-123"));
        assert_eq!(
            config.gemini.base_url.as_deref(),
            Some("http://192.168.1.100:8080/v1beta")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
model = "my-model"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.model.as_deref(), Some("my-model"));
        assert!(config.gemini.api_key.is_none());
    }
}
