//! Roster module
//!
//! Player records, team code normalisation, and the JSON files the CLI
//! reads players and season stats from.

mod team;
mod types;

pub use team::canonical_team;
pub use types::{Player, StatLine, ValuationInput, GAME_MINUTES, MAX_ADJUSTMENT, SEASON_GAMES};

use crate::projection::with_projected_games;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Roster file errors
#[derive(Debug, Error)]
pub enum RosterError {
    /// File could not be read or written
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// File contents were not valid JSON for the expected shape
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of merging a stats export into a roster
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Updated roster, with games projections recomputed
    pub players: Vec<Player>,
    /// Roster names that had a stat line
    pub matched: Vec<String>,
    /// Stat line names with no roster entry
    pub unmatched: Vec<String>,
}

/// Load a JSON array of players
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Player>, RosterError> {
    read_json(path.as_ref())
}

/// Write players as a pretty-printed JSON array
pub fn save_roster(path: impl AsRef<Path>, players: &[Player]) -> Result<(), RosterError> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(players).map_err(|source| RosterError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, content).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a stats export keyed by player name
pub fn load_stats(path: impl AsRef<Path>) -> Result<HashMap<String, StatLine>, RosterError> {
    read_json(path.as_ref())
}

/// Apply stat lines to players by exact name
///
/// Matched players take the export's minutes, games and team. Games
/// projections are recomputed for the whole roster afterwards, since the
/// league-wide season progress may have moved.
pub fn merge_stats(players: &[Player], stats: &HashMap<String, StatLine>) -> MergeOutcome {
    let mut matched = Vec::new();
    let merged: Vec<Player> = players
        .iter()
        .map(|player| match stats.get(&player.name) {
            Some(line) => {
                matched.push(player.name.clone());
                apply_stat_line(player, line)
            }
            None => player.clone(),
        })
        .collect();

    let mut unmatched: Vec<String> = stats
        .keys()
        .filter(|name| !players.iter().any(|p| &p.name == *name))
        .cloned()
        .collect();
    unmatched.sort();

    tracing::debug!(
        matched = matched.len(),
        unmatched = unmatched.len(),
        "Merged season stats"
    );

    MergeOutcome {
        players: with_projected_games(&merged),
        matched,
        unmatched,
    }
}

fn apply_stat_line(player: &Player, line: &StatLine) -> Player {
    let mut updated = player.clone();
    updated.avg_minutes = Some(line.avg_minutes);
    updated.games_played = Some(line.games_played);
    updated.team = canonical_team(&line.team);
    if line.recent_games_played.is_some() {
        updated.recent_games_played = line.recent_games_played;
    }
    updated
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, RosterError> {
    let content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RosterError::Json {
        path: path.to_path_buf(),
        source,
    })
}
