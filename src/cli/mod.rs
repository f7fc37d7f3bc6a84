//! CLI interface for darko-value
//!
//! Provides subcommands for:
//! - `value`: Value one player now and over the coming seasons
//! - `rank`: Surplus leaderboards for players and teams
//! - `games`: Fill in full-season games projections
//! - `merge-stats`: Merge a season stats export into the roster
//! - `config`: Show the effective configuration

mod games;
mod rank;
mod value;

pub use games::{GamesArgs, MergeStatsArgs};
pub use rank::{format_leaderboards, RankArgs};
pub use value::{format_projection, ValueArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "darko-value")]
#[command(about = "Project NBA player salaries from DARKO ratings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Value a player and project the next seasons
    Value(ValueArgs),
    /// Rank players and teams by surplus value
    Rank(RankArgs),
    /// Project full-season games for every player
    Games(GamesArgs),
    /// Merge a season stats export into the roster
    MergeStats(MergeStatsArgs),
    /// Show configuration
    Config,
}
