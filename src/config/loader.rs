//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

use crate::window::types::Height;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting has a value the list can't work with.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending setting.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Which engine the demo list runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Every item is `item_height` tall.
    Fixed,
    /// Items start at `estimated_height` and are corrected after measurement.
    Dynamic,
}

impl FromStr for ListMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "dynamic" => Ok(Self::Dynamic),
            other => Err(ConfigError::InvalidValue {
                field: "mode",
                reason: format!("expected \"fixed\" or \"dynamic\", got {:?}", other),
            }),
        }
    }
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/vlist/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Engine to run ("fixed" or "dynamic").
    #[serde(default)]
    pub mode: Option<ListMode>,

    /// Number of items in the list.
    #[serde(default)]
    pub item_count: Option<usize>,

    /// Row height for the fixed engine.
    #[serde(default)]
    pub item_height: Option<f64>,

    /// Height assumed for items not yet measured (dynamic engine).
    #[serde(default)]
    pub estimated_height: Option<f64>,

    /// Items realized beyond each edge of the viewport.
    #[serde(default)]
    pub overscan: Option<usize>,

    /// Distance moved by one line-scroll.
    #[serde(default)]
    pub scroll_step: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Engine to run.
    pub mode: ListMode,
    /// Number of items.
    pub item_count: usize,
    /// Fixed row height.
    pub item_height: f64,
    /// Estimate for unmeasured items.
    pub estimated_height: f64,
    /// Overscan on each side.
    pub overscan: usize,
    /// Line-scroll distance.
    pub scroll_step: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            mode: ListMode::Dynamic,
            item_count: 1000,
            item_height: 3.0,
            estimated_height: 2.0,
            overscan: 2,
            scroll_step: 1.0,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Fixed row height as a validated [`Height`].
    pub fn item_height(&self) -> Result<Height, ConfigError> {
        Height::new(self.item_height).map_err(|e| ConfigError::InvalidValue {
            field: "item_height",
            reason: e.to_string(),
        })
    }

    /// Estimate as a validated [`Height`].
    pub fn estimated_height(&self) -> Result<Height, ConfigError> {
        Height::new(self.estimated_height).map_err(|e| ConfigError::InvalidValue {
            field: "estimated_height",
            reason: e.to_string(),
        })
    }

    /// Check every value the list depends on.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.item_height()?;
        self.estimated_height()?;
        if !(self.scroll_step.is_finite() && self.scroll_step > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "scroll_step",
                reason: format!("must be finite and > 0 (got {})", self.scroll_step),
            });
        }
        Ok(())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vlist/vlist.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vlist").join("vlist.log")
    } else {
        PathBuf::from("vlist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/vlist/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vlist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VLIST_CONFIG` environment variable
/// 3. Default path `~/.config/vlist/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("VLIST_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        mode: config.mode.unwrap_or(defaults.mode),
        item_count: config.item_count.unwrap_or(defaults.item_count),
        item_height: config.item_height.unwrap_or(defaults.item_height),
        estimated_height: config.estimated_height.unwrap_or(defaults.estimated_height),
        overscan: config.overscan.unwrap_or(defaults.overscan),
        scroll_step: config.scroll_step.unwrap_or(defaults.scroll_step),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `VLIST_MODE`: "fixed" or "dynamic"
/// - `VLIST_OVERSCAN`: non-negative integer
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(mode) = std::env::var("VLIST_MODE") {
        match mode.parse::<ListMode>() {
            Ok(mode) => config.mode = mode,
            Err(err) => warn!(%err, "ignoring VLIST_MODE"),
        }
    }

    if let Ok(overscan) = std::env::var("VLIST_OVERSCAN") {
        match overscan.trim().parse::<usize>() {
            Ok(overscan) => config.overscan = overscan,
            Err(err) => warn!(%err, value = %overscan, "ignoring VLIST_OVERSCAN"),
        }
    }

    config
}

/// Values passed explicitly on the command line.
///
/// `None` means the flag was not given and the lower-precedence value stays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--mode`
    pub mode: Option<ListMode>,
    /// `--items`
    pub item_count: Option<usize>,
    /// `--item-height`
    pub item_height: Option<f64>,
    /// `--estimated-height`
    pub estimated_height: Option<f64>,
    /// `--overscan`
    pub overscan: Option<usize>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(item_count) = cli.item_count {
        config.item_count = item_count;
    }
    if let Some(item_height) = cli.item_height {
        config.item_height = item_height;
    }
    if let Some(estimated_height) = cli.estimated_height {
        config.estimated_height = estimated_height;
    }
    if let Some(overscan) = cli.overscan {
        config.overscan = overscan;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_vlist_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("vlist.log"),
            "Default log path should end with 'vlist.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(!config.log_file_path.as_os_str().is_empty());
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(resolved.log_file_path, custom_path);
    }

    #[test]
    fn missing_config_file_log_path_uses_default() {
        let resolved = merge_config(Some(ConfigFile::default()));
        assert_eq!(resolved.log_file_path, default_log_path());
    }
}
