//! Games and merge-stats command implementations

use crate::projection::{season_progress, with_projected_games};
use crate::roster::{load_roster, load_stats, merge_stats, save_roster};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GamesArgs {
    /// Roster JSON file
    #[arg(long, default_value = "players.json")]
    pub roster: PathBuf,

    /// Output file; the roster is rewritten in place when omitted
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl GamesArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let players = load_roster(&self.roster)?;
        let projected = with_projected_games(&players);
        let with_projection = projected
            .iter()
            .filter(|p| p.projected_games.is_some())
            .count();

        let out = self.out.as_ref().unwrap_or(&self.roster);
        save_roster(out, &projected)?;

        tracing::info!(
            players = projected.len(),
            projected = with_projection,
            season_progress = season_progress(&projected),
            out = ?out,
            "Projected season games"
        );
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct MergeStatsArgs {
    /// Roster JSON file
    #[arg(long, default_value = "players.json")]
    pub roster: PathBuf,

    /// Stats export keyed by player name
    #[arg(long, default_value = "nba_stats.json")]
    pub stats: PathBuf,

    /// Output file; the roster is rewritten in place when omitted
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl MergeStatsArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let players = load_roster(&self.roster)?;
        let stats = load_stats(&self.stats)?;
        let outcome = merge_stats(&players, &stats);

        for name in &outcome.unmatched {
            tracing::warn!(player = %name, "No roster entry for stat line");
        }

        let out = self.out.as_ref().unwrap_or(&self.roster);
        save_roster(out, &outcome.players)?;

        tracing::info!(
            matched = outcome.matched.len(),
            unmatched = outcome.unmatched.len(),
            out = ?out,
            "Merged season stats"
        );
        Ok(())
    }
}
