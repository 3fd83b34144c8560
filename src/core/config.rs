//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.react-essentials/config.toml`. If missing on first
//! run, a commented-out default is generated so users can discover all
//! options.

use log::{LevelFilter, debug, info, warn};
use ratatui::style::Color;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct EssentialsConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    pub accent_color: Option<String>,
    pub mouse: Option<bool>,
    pub poll_interval_ms: Option<u64>,
}

/// Values taken from CLI flags (None / false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub accent: Option<String>,
    pub no_mouse: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ACCENT: Color = Color::Cyan;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "react-essentials.log";

pub const ACCENT_ENV: &str = "ESSENTIALS_ACCENT";
pub const LOG_LEVEL_ENV: &str = "ESSENTIALS_LOG";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub accent: Color,
    pub mouse: bool,
    pub poll_interval: Duration,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
            mouse: true,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
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

/// Returns the path to `~/.react-essentials/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".react-essentials").join("config.toml"))
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EssentialsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: &Path) -> Result<EssentialsConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(EssentialsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: EssentialsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r##"# React Essentials Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [ui]
# accent_color = "cyan"        # ratatui colour name or "#rrggbb"; env ESSENTIALS_ACCENT
# mouse = true                 # click tab buttons, scroll with the wheel
# poll_interval_ms = 250       # how long to wait for input between redraw checks
"##;

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
pub fn resolve(config: &EssentialsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

fn resolve_with_env(
    config: &EssentialsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Accent: CLI → env → config → default
    let accent = cli
        .accent
        .clone()
        .or_else(|| env(ACCENT_ENV))
        .or_else(|| config.ui.accent_color.clone())
        .map(|name| parse_color(&name))
        .unwrap_or(DEFAULT_ACCENT);

    let mouse = !cli.no_mouse && config.ui.mouse.unwrap_or(true);

    let poll_interval = Duration::from_millis(
        config
            .ui
            .poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            .max(10),
    );

    ResolvedConfig {
        accent,
        mouse,
        poll_interval,
    }
}

fn parse_color(name: &str) -> Color {
    Color::from_str(name.trim()).unwrap_or_else(|_| {
        warn!("Unknown accent colour '{}', using default", name);
        DEFAULT_ACCENT
    })
}

/// Log level: CLI → env → default. Runs before the logger exists, so an
/// unparseable value silently falls through to the next source.
pub fn resolve_log_level(cli: Option<&str>) -> LevelFilter {
    cli.and_then(|s| s.parse().ok())
        .or_else(|| {
            std::env::var(LOG_LEVEL_ENV)
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
