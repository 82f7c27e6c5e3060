//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stockpile/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct StockpileConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    pub price_decimals: Option<usize>,
    pub poll_interval_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "stockpile.log";
pub const DEFAULT_PRICE_DECIMALS: usize = 2;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;
/// Prices are plain decimals; more places than this is noise.
pub const MAX_PRICE_DECIMALS: usize = 6;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    pub price_decimals: usize,
    pub poll_interval: Duration,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&StockpileConfig::default(), &CliOverrides::default(), &mut Vec::new())
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
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

/// Commented-out template written on first run; parses to all defaults.
pub const DEFAULT_CONFIG: &str = r#"# Stockpile Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                # "error", "warn", "info", "debug", "trace"
#                                   # or set STOCKPILE_LOG_LEVEL
# log_file = "stockpile.log"        # or set STOCKPILE_LOG_FILE

# [display]
# price_decimals = 2                # decimal places for prices and totals
# poll_interval_ms = 250            # terminal event poll timeout
"#;

/// Where the file-level config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// A default file was just written here; its values are all defaults.
    Generated(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(p) => write!(f, "{}", p.display()),
            ConfigSource::Generated(p) => write!(f, "{} (generated)", p.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Config is loaded before the logger exists, so problems that don't stop
/// loading are returned in `warnings` for the caller to report.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: StockpileConfig,
    pub source: ConfigSource,
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    fn defaults(source: ConfigSource, warnings: Vec<String>) -> Self {
        Self {
            config: StockpileConfig::default(),
            source,
            warnings,
        }
    }
}

/// Returns the path to `~/.stockpile/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stockpile").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise `~/.stockpile/config.toml`.
///
/// A missing default file is generated (commented out) and defaults are
/// returned. A missing explicit file is an `Io` error. A malformed file is
/// `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match config_path() {
            Some(path) => load_or_generate(&path),
            None => Ok(LoadedConfig::defaults(
                ConfigSource::Defaults,
                vec!["Could not determine home directory, using default config".to_string()],
            )),
        },
    }
}

fn load_or_generate(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        return read_config(path);
    }
    match generate_default_config(path) {
        Ok(()) => Ok(LoadedConfig::defaults(
            ConfigSource::Generated(path.to_path_buf()),
            Vec::new(),
        )),
        Err(e) => Ok(LoadedConfig::defaults(
            ConfigSource::Defaults,
            vec![format!(
                "Failed to write default config to {}: {}",
                path.display(),
                e
            )],
        )),
    }
}

fn read_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    Ok(LoadedConfig {
        config: parse_config(&contents)?,
        source: ConfigSource::File(path.to_path_buf()),
        warnings: Vec::new(),
    })
}

pub fn parse_config(contents: &str) -> Result<StockpileConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Writes [`DEFAULT_CONFIG`] to `path`, creating parent directories.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Ignored env values are appended to `warnings`.
pub fn resolve(
    config: &StockpileConfig,
    cli: &CliOverrides,
    warnings: &mut Vec<String>,
) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), warnings)
}

fn resolve_with_env(
    config: &StockpileConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<String>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| {
            env("STOCKPILE_LOG_LEVEL").and_then(|raw| match LogLevel::from_str(&raw, true) {
                Ok(level) => Some(level),
                Err(_) => {
                    warnings.push(format!("Ignoring invalid STOCKPILE_LOG_LEVEL: {raw}"));
                    None
                }
            })
        })
        .or(config.general.log_level)
        .unwrap_or_default();

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("STOCKPILE_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let price_decimals = config
        .display
        .price_decimals
        .unwrap_or(DEFAULT_PRICE_DECIMALS)
        .min(MAX_PRICE_DECIMALS);

    let poll_interval = Duration::from_millis(
        config
            .display
            .poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            .max(1),
    );

    ResolvedConfig {
        log_level,
        log_file,
        price_decimals,
        poll_interval,
    }
}
