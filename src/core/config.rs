//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.swapi-browser/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ColorMode;
use crate::api::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<ColorMode>,
    pub log_level: Option<String>,
    pub initial_search: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub theme: Option<ColorMode>,
    pub search: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub theme: ColorMode,
    pub log_level: LevelFilter,
    pub initial_search: String,
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

/// Returns the path to `~/.swapi-browser/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".swapi-browser").join("config.toml"))
}

/// Load config from `~/.swapi-browser/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BrowserConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(BrowserConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<BrowserConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(BrowserConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BrowserConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# SWAPI Browser Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"                     # "dark" or "light" (env: SWAPI_BROWSER_THEME)
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# initial_search = ""                # Search term used when the list first loads

# [api]
# base_url = "https://swapi.dev/api" # env: SWAPI_BASE_URL
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
pub fn resolve(config: &BrowserConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("SWAPI_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| {
            std::env::var("SWAPI_BROWSER_THEME")
                .ok()
                .and_then(|raw| parse_theme(&raw))
        })
        .or(config.general.theme)
        .unwrap_or_default();

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|raw| match LevelFilter::from_str(raw) {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Unknown log level {:?}, using default", raw);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Initial search: CLI → config → none
    let initial_search = cli
        .search
        .clone()
        .or_else(|| config.general.initial_search.clone())
        .unwrap_or_default();

    ResolvedConfig {
        base_url,
        theme,
        log_level,
        initial_search,
    }
}

fn parse_theme(raw: &str) -> Option<ColorMode> {
    match ColorMode::from_str(raw, true) {
        Ok(mode) => Some(mode),
        Err(_) => {
            warn!("Unknown theme {:?} in SWAPI_BROWSER_THEME, ignoring", raw);
            None
        }
    }
}
