//! Full-season games projection from partial-season participation
//!
//! Season-long participation rates understate players who missed early games
//! but are healthy now, so a currently-healthy player is also projected at
//! near-full participation for the rest of the season and keeps whichever
//! estimate is higher.

use crate::roster::{Player, SEASON_GAMES};

/// Recent games (out of the trailing ten-game league window) that count as healthy
pub const HEALTHY_THRESHOLD: u32 = 5;

/// Share of remaining games a healthy player is expected to play
pub const FORWARD_PARTICIPATION: f64 = 0.9;

/// Project games played over a full season
///
/// `season_progress` is the number of games elapsed league-wide.
pub fn project_season_games(
    games_played: u32,
    season_progress: u32,
    recent_games_played: Option<u32>,
) -> u32 {
    if season_progress == 0 {
        return SEASON_GAMES;
    }
    if games_played == 0 {
        return 0;
    }

    let season = SEASON_GAMES as f64;
    let played = games_played as f64;
    let elapsed = season_progress as f64;

    let standard = round_games(played / elapsed * season);

    match recent_games_played {
        Some(recent) if recent >= HEALTHY_THRESHOLD => {
            let optimistic = round_games(played + (season - elapsed) * FORWARD_PARTICIPATION);
            standard.max(optimistic)
        }
        _ => standard,
    }
}

/// Games elapsed league-wide, taken as the most games any player has played
///
/// Never less than 1.
pub fn season_progress(players: &[Player]) -> u32 {
    players
        .iter()
        .filter_map(|p| p.games_played)
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Copies of `players` with `projected_games` filled in
///
/// Players without observed games are returned unchanged.
pub fn with_projected_games(players: &[Player]) -> Vec<Player> {
    let progress = season_progress(players);
    tracing::debug!(
        players = players.len(),
        season_progress = progress,
        "Projecting season games"
    );

    players
        .iter()
        .map(|player| {
            let mut projected = player.clone();
            if let Some(games_played) = player.games_played {
                projected.projected_games = Some(project_season_games(
                    games_played,
                    progress,
                    player.recent_games_played,
                ));
            }
            projected
        })
        .collect()
}

fn round_games(games: f64) -> u32 {
    games.round().max(0.0) as u32
}
