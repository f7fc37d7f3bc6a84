//! Configuration types for darko-value

use crate::projection::{InflationSchedule, Season};
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Pricing model configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Season minutes of an average non-replacement player
    #[serde(default = "default_league_minutes")]
    pub league_minutes: f64,

    /// Rating valued at zero above the minimum
    #[serde(default = "default_replacement_level")]
    pub replacement_level: f64,

    /// Dollar value of one win, in millions
    #[serde(default = "default_dollars_per_win")]
    pub dollars_per_win: f64,

    /// Valuations below this are reported as the minimum salary
    #[serde(default = "default_minimum_salary_floor")]
    pub minimum_salary_floor: f64,
}

fn default_league_minutes() -> f64 {
    1475.0
}
fn default_replacement_level() -> f64 {
    -3.0
}
fn default_dollars_per_win() -> f64 {
    4.32
}
fn default_minimum_salary_floor() -> f64 {
    3.0
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            league_minutes: 1475.0,
            replacement_level: -3.0,
            dollars_per_win: 4.32,
            minimum_salary_floor: 3.0,
        }
    }
}

/// Multi-year projection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionConfig {
    /// Current season label, e.g. "2025-26"; today's season when absent
    #[serde(default)]
    pub current_season: Option<Season>,

    /// Number of future seasons to project
    #[serde(default = "default_horizon_years")]
    pub horizon_years: usize,

    /// Yearly salary cap growth, compounded
    #[serde(default = "default_cap_growth")]
    pub cap_growth: Decimal,

    /// Explicit scalers by season label, replacing compounded growth
    #[serde(default)]
    pub inflation: BTreeMap<Season, Decimal>,
}

fn default_horizon_years() -> usize {
    5
}
fn default_cap_growth() -> Decimal {
    Decimal::new(10, 2) // 0.10 = 10%
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            current_season: None,
            horizon_years: 5,
            cap_growth: Decimal::new(10, 2),
            inflation: BTreeMap::new(),
        }
    }
}

impl ProjectionConfig {
    /// Configured current season, or the one in progress on `today`
    pub fn season(&self, today: chrono::NaiveDate) -> Season {
        self.current_season.unwrap_or_else(|| Season::current(today))
    }

    /// Future seasons to project after `current`
    pub fn future_seasons(&self, current: Season) -> Vec<Season> {
        current.following(self.horizon_years)
    }

    /// Inflation scalers for the seasons after `current`
    pub fn inflation_schedule(&self, current: Season) -> InflationSchedule {
        InflationSchedule::compounding(current, self.horizon_years, self.cap_growth)
            .with_overrides(&self.inflation)
    }
}

/// Surplus ranking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Entries per leaderboard
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Games assumed when a player has no projection
    #[serde(default = "default_games")]
    pub default_games: u32,

    /// Minutes assumed when a player has no season average
    #[serde(default = "default_minutes")]
    pub default_minutes: f64,
}

fn default_top_n() -> usize {
    10
}
fn default_games() -> u32 {
    70
}
fn default_minutes() -> f64 {
    30.0
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            default_games: 70,
            default_minutes: 30.0,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
