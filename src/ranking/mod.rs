//! Ranking module
//!
//! Cross-sectional surplus leaderboards for players and teams

mod settings;
mod surplus;

pub use settings::{DefaultSettings, OverrideSettings, SettingsResolver};
pub use surplus::{
    Leaderboards, SurplusEntry, SurplusRanker, DEFAULT_TOP_N, RANKING_MINIMUM_PROXY,
};
