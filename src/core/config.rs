//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pitlane/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ViewMode;
use crate::api::DEFAULT_BASE_URL;
use crate::core::drivers::DEFAULT_PAGE_SIZE;
use crate::core::races::DEFAULT_RACES_PAGE_SIZE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PitlaneConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub page_size: Option<usize>,
    pub races_page_size: Option<usize>,
    pub default_view: Option<ViewMode>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub page_size: usize,
    pub races_page_size: usize,
    pub view_mode: ViewMode,
    pub log_level: LevelFilter,
}

/// Values taken from CLI flags. `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub page_size: Option<usize>,
    pub view_mode: Option<ViewMode>,
    pub log_level: Option<LevelFilter>,
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

/// Returns the path to `~/.pitlane/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pitlane").join("config.toml"))
}

/// Load config from `~/.pitlane/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PitlaneConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PitlaneConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PitlaneConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PitlaneConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PitlaneConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PitlaneConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Pitlane Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# page_size = 30                     # Drivers per page (or PITLANE_PAGE_SIZE)
# races_page_size = 30               # Race results fetched per driver
# default_view = "table"             # "table" or "cards"
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"

# [api]
# base_url = "https://api.jolpi.ca/ergast/f1"   # Or set PITLANE_BASE_URL
# timeout_secs = 15
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PitlaneConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("PITLANE_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Page size: CLI → env → config → default. Zero is not a page size.
    let page_size = cli
        .page_size
        .or_else(|| {
            std::env::var("PITLANE_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.general.page_size)
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let races_page_size = config
        .general
        .races_page_size
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_RACES_PAGE_SIZE);

    let view_mode = cli
        .view_mode
        .or(config.general.default_view)
        .unwrap_or_default();

    let log_level = cli.log_level.unwrap_or_else(|| {
        config
            .general
            .log_level
            .as_deref()
            .and_then(|s| match s.parse() {
                Ok(level) => Some(level),
                Err(_) => {
                    warn!("Unknown log_level {:?}, using {}", s, DEFAULT_LOG_LEVEL);
                    None
                }
            })
            .unwrap_or(DEFAULT_LOG_LEVEL)
    });

    let timeout = match config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    ResolvedConfig {
        base_url,
        timeout,
        page_size,
        races_page_size,
        view_mode,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests that read env vars assume PITLANE_* is unset in the test environment.

    #[test]
    fn test_default_config_is_empty() {
        let config = PitlaneConfig::default();
        assert!(config.general.page_size.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&PitlaneConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(resolved.races_page_size, DEFAULT_RACES_PAGE_SIZE);
        assert_eq!(resolved.view_mode, ViewMode::Table);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.timeout, Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PitlaneConfig {
            general: GeneralConfig {
                page_size: Some(10),
                races_page_size: Some(100),
                default_view: Some(ViewMode::Cards),
                log_level: Some("warn".to_string()),
            },
            api: ApiConfig {
                base_url: Some("http://localhost:8000/ergast/f1".to_string()),
                timeout_secs: Some(0),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.page_size, 10);
        assert_eq!(resolved.races_page_size, 100);
        assert_eq!(resolved.view_mode, ViewMode::Cards);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.base_url, "http://localhost:8000/ergast/f1");
        assert_eq!(resolved.timeout, None);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = PitlaneConfig {
            general: GeneralConfig {
                page_size: Some(10),
                default_view: Some(ViewMode::Cards),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            page_size: Some(50),
            view_mode: Some(ViewMode::Table),
            base_url: Some("http://cli".to_string()),
            log_level: Some(LevelFilter::Info),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.page_size, 50);
        assert_eq!(resolved.view_mode, ViewMode::Table);
        assert_eq!(resolved.base_url, "http://cli");
        assert_eq!(resolved.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let config = PitlaneConfig {
            general: GeneralConfig {
                page_size: Some(0),
                races_page_size: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(resolved.races_page_size, DEFAULT_RACES_PAGE_SIZE);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = PitlaneConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
page_size = 20
default_view = "cards"

[api]
base_url = "http://192.168.1.100:8000/ergast/f1"
timeout_secs = 5
"#;
        let config: PitlaneConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.page_size, Some(20));
        assert_eq!(config.general.default_view, Some(ViewMode::Cards));
        assert_eq!(config.api.timeout_secs, Some(5));
        assert!(config.general.races_page_size.is_none());
    }

    #[test]
    fn test_bad_view_is_parse_error() {
        let result: Result<PitlaneConfig, _> = toml::from_str("[general]\ndefault_view = \"grid\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("pitlane-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.page_size.is_none());
        assert!(path.exists());

        // The generated file is fully commented out and parses back to defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.api.base_url.is_none());

        let _ = fs::remove_dir_all(&dir);
    }
}
