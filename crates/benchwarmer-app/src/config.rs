// Configuration loading and parsing (config/league.toml).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use benchwarmer_sleeper::client::{DEFAULT_API_BASE, DEFAULT_STATS_BASE};
use benchwarmer_sleeper::{ScoringFormat, SleeperSettings};
use serde::Deserialize;
use thiserror::Error;

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

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    #[serde(default)]
    pub sleeper: SleeperConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    pub league_id: String,
    pub season: String,
    #[serde(default = "default_season_type")]
    pub season_type: String,
    #[serde(default)]
    pub scoring: ScoringFormat,
    /// Display names keyed by roster ID. TOML keys are strings, so IDs are
    /// parsed during validation.
    #[serde(default)]
    pub teams: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SleeperConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_stats_base")]
    pub stats_base: String,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SleeperConfig {
    fn default() -> Self {
        SleeperConfig {
            api_base: default_api_base(),
            stats_base: default_stats_base(),
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            snapshot_path: default_snapshot_path(),
            report_path: default_report_path(),
        }
    }
}

fn default_season_type() -> String {
    "regular".into()
}
fn default_api_base() -> String {
    DEFAULT_API_BASE.into()
}
fn default_stats_base() -> String {
    DEFAULT_STATS_BASE.into()
}
fn default_concurrency() -> usize {
    8
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_snapshot_path() -> String {
    "data/rosters.json".into()
}
fn default_report_path() -> String {
    "team-report.md".into()
}

impl Config {
    /// Roster display names with their IDs parsed.
    pub fn team_names(&self) -> Result<HashMap<u32, String>, ConfigError> {
        self.league
            .teams
            .iter()
            .map(|(key, name)| {
                key.trim()
                    .parse::<u32>()
                    .map(|id| (id, name.clone()))
                    .map_err(|_| ConfigError::ValidationError {
                        field: format!("league.teams.{key}"),
                        message: "roster id must be a non-negative integer".into(),
                    })
            })
            .collect()
    }

    /// Client settings for the Sleeper source.
    pub fn sleeper_settings(&self) -> Result<SleeperSettings, ConfigError> {
        let mut settings = SleeperSettings::new(&self.league.league_id, &self.league.season);
        settings.api_base = self.sleeper.api_base.clone();
        settings.stats_base = self.sleeper.stats_base.clone();
        settings.season_type = self.league.season_type.clone();
        settings.scoring = self.league.scoring;
        settings.concurrency = self.sleeper.concurrency;
        settings.timeout = Duration::from_secs(self.sleeper.timeout_secs);
        settings.team_names = self.team_names()?;
        Ok(settings)
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/league.toml` relative to `base_dir`.
///
/// Does not copy defaults; prefer `load_config()`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("league.toml");
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Copy any file in `defaults/` that is missing from `config/`. Returns the
/// files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = config_dir.join(file_name);
        if target.exists() {
            continue;
        }
        std::fs::copy(&path, &target).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to copy {} to {}: {e}", path.display(), target.display()),
        })?;
        copied.push(target);
    }

    Ok(copied)
}

/// Load config relative to the current working directory, copying defaults
/// first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let required: &[(&str, &str)] = &[
        ("league.name", config.league.name.as_str()),
        ("league.league_id", config.league.league_id.as_str()),
        ("league.season", config.league.season.as_str()),
        ("output.snapshot_path", config.output.snapshot_path.as_str()),
        ("output.report_path", config.output.report_path.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: field.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    if config.sleeper.concurrency == 0 {
        return Err(ConfigError::ValidationError {
            field: "sleeper.concurrency".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.sleeper.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "sleeper.timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    config.team_names()?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
