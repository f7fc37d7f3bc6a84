//! darko-value: NBA salary valuation from DARKO ratings
//!
//! This library provides the core components for:
//! - Pricing a player season from games, minutes and rating
//! - Aging ratings forward season by season
//! - Projecting full-season games from partial participation
//! - Multi-year valuation trajectories with cap inflation and contract surplus
//! - Player and team surplus leaderboards
//! - Roster and stats file loading for the CLI

pub mod cli;
pub mod config;
pub mod model;
pub mod projection;
pub mod ranking;
pub mod roster;
pub mod telemetry;
