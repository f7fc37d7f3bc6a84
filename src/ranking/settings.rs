//! Per-player valuation settings

use crate::config::RankingConfig;
use crate::roster::{Player, ValuationInput};
use std::collections::HashMap;

/// Resolves the valuation assumptions to use for a player
pub trait SettingsResolver {
    fn resolve(&self, player: &Player) -> ValuationInput;
}

/// Settings taken from the player's observed stats
///
/// Games come from the projected season games, minutes from the season
/// average; either falls back to the configured default when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultSettings {
    pub games: u32,
    pub minutes: f64,
}

impl DefaultSettings {
    pub fn new(games: u32, minutes: f64) -> Self {
        Self { games, minutes }
    }

    /// Create from RankingConfig
    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(config.default_games, config.default_minutes)
    }
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self::new(70, 30.0)
    }
}

impl SettingsResolver for DefaultSettings {
    fn resolve(&self, player: &Player) -> ValuationInput {
        ValuationInput::clamped(
            player.projected_games.unwrap_or(self.games),
            player.avg_minutes.unwrap_or(self.minutes),
            0.0,
        )
    }
}

/// Explicit settings for named players over a fallback resolver
///
/// Mirrors the per-player state a user has dialled in and shared.
#[derive(Debug, Clone)]
pub struct OverrideSettings<R = DefaultSettings> {
    overrides: HashMap<String, ValuationInput>,
    fallback: R,
}

impl<R: SettingsResolver> OverrideSettings<R> {
    pub fn new(fallback: R) -> Self {
        Self {
            overrides: HashMap::new(),
            fallback,
        }
    }

    /// Use `input` for the player called `name`
    pub fn with_override(mut self, name: impl Into<String>, input: ValuationInput) -> Self {
        self.overrides.insert(name.into(), input);
        self
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl<R: SettingsResolver> SettingsResolver for OverrideSettings<R> {
    fn resolve(&self, player: &Player) -> ValuationInput {
        self.overrides
            .get(&player.name)
            .copied()
            .unwrap_or_else(|| self.fallback.resolve(player))
    }
}
