//! Rank command implementation

use crate::config::Config;
use crate::model::DarkoModel;
use crate::projection::with_projected_games;
use crate::ranking::{DefaultSettings, Leaderboards, SurplusEntry, SurplusRanker};
use crate::roster::load_roster;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Roster JSON file
    #[arg(long, default_value = "players.json")]
    pub roster: PathBuf,

    /// Entries per leaderboard (overrides config)
    #[arg(long)]
    pub top: Option<usize>,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

impl RankArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let players = with_projected_games(&load_roster(&self.roster)?);
        tracing::info!(players = players.len(), roster = ?self.roster, "Loaded roster");

        let top_n = self.top.unwrap_or(config.ranking.top_n);
        let ranker = SurplusRanker::new(DarkoModel::from_config(&config.model), top_n);
        let boards = ranker.rank(&players, &DefaultSettings::from_config(&config.ranking));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&boards)?);
        } else {
            print!("{}", format_leaderboards(&boards));
        }
        Ok(())
    }
}

/// Format all four leaderboards as tables for CLI output
pub fn format_leaderboards(boards: &Leaderboards) -> String {
    let mut out = String::new();
    write_board(&mut out, "MOST OVERVALUED PLAYERS", &boards.overvalued_players);
    write_board(&mut out, "MOST UNDERVALUED PLAYERS", &boards.undervalued_players);
    write_board(&mut out, "MOST OVERVALUED TEAMS", &boards.overvalued_teams);
    write_board(&mut out, "MOST UNDERVALUED TEAMS", &boards.undervalued_teams);
    out
}

fn write_board(out: &mut String, title: &str, entries: &[SurplusEntry]) {
    out.push_str(&format!(
        "{title}\n───────────────────────────────────────────────────────\n"
    ));
    if entries.is_empty() {
        out.push_str("  (none)\n");
    }
    for (rank, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<32} {:>+9.1}\n",
            rank + 1,
            entry.name,
            entry.surplus
        ));
    }
    out.push('\n');
}
