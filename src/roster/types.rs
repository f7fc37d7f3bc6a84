//! Roster types

use crate::model::PricingParams;
use crate::projection::Season;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Games in a regular season
pub const SEASON_GAMES: u32 = 82;

/// Maximum minutes in a regulation game
pub const GAME_MINUTES: f64 = 48.0;

/// Largest user rating override in either direction
pub const MAX_ADJUSTMENT: f64 = 5.0;

/// A player record as supplied by the data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique display name
    pub name: String,
    /// Team code, possibly a historical alias
    pub team: String,
    pub age: u32,
    /// DARKO rating
    pub darko: f64,
    /// Current season salary in millions, 0 for free agents
    pub actual_salary: Decimal,
    /// Contracted salary by future season; absent means no known contract
    #[serde(default)]
    pub future_salaries: BTreeMap<Season, Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub games_played: Option<u32>,
    /// Games played in the trailing league-wide window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_games_played: Option<u32>,
    /// Previously computed full-season games estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_games: Option<u32>,
}

impl Player {
    /// Create a player with no observed season stats
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        age: u32,
        darko: f64,
        actual_salary: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            age,
            darko,
            actual_salary,
            future_salaries: BTreeMap::new(),
            avg_minutes: None,
            games_played: None,
            recent_games_played: None,
            projected_games: None,
        }
    }

    /// Add a known future contract value
    pub fn with_future_salary(mut self, season: Season, salary: Decimal) -> Self {
        self.future_salaries.insert(season, salary);
        self
    }

    /// Set observed season participation
    pub fn with_season_stats(mut self, avg_minutes: f64, games_played: u32) -> Self {
        self.avg_minutes = Some(avg_minutes);
        self.games_played = Some(games_played);
        self
    }

    pub fn with_recent_games(mut self, recent_games_played: u32) -> Self {
        self.recent_games_played = Some(recent_games_played);
        self
    }

    /// Free agents carry no current contract
    pub fn is_free_agent(&self) -> bool {
        self.actual_salary.is_zero()
    }

    pub fn has_played(&self) -> bool {
        self.games_played.is_some_and(|games| games > 0)
    }

    /// Contracted salary for a future season, if known
    pub fn future_salary(&self, season: Season) -> Option<Decimal> {
        self.future_salaries.get(&season).copied()
    }
}

/// Playing-time and rating assumptions for one valuation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    /// Season games, 1 to 82
    pub games: u32,
    /// Minutes per game, 0 to 48
    pub minutes: f64,
    /// Rating override, -5 to 5
    pub adjustment: f64,
}

impl ValuationInput {
    /// Create an input as given, without range checks
    pub fn new(games: u32, minutes: f64, adjustment: f64) -> Self {
        Self {
            games,
            minutes,
            adjustment,
        }
    }

    /// Create an input with every field pulled into its allowed range
    pub fn clamped(games: u32, minutes: f64, adjustment: f64) -> Self {
        Self {
            games: games.clamp(1, SEASON_GAMES),
            minutes: minutes.clamp(0.0, GAME_MINUTES),
            adjustment: adjustment.clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT),
        }
    }

    /// Pricing parameters for a player with the given base rating
    pub fn pricing_params(&self, rating: f64) -> PricingParams {
        PricingParams::new(self.games as f64, self.minutes, rating, self.adjustment)
    }
}

/// One player's line from a season stats export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub avg_minutes: f64,
    pub games_played: u32,
    pub team: String,
    #[serde(default)]
    pub recent_games_played: Option<u32>,
}
