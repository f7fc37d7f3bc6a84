//! Projection module
//!
//! Games-played estimates for the current season and valuation trajectories
//! for the seasons after it.

mod games;
mod inflation;
mod multi_year;
mod season;

pub use games::{
    project_season_games, season_progress, with_projected_games, FORWARD_PARTICIPATION,
    HEALTHY_THRESHOLD,
};
pub use inflation::InflationSchedule;
pub use multi_year::{MultiYearProjection, MultiYearProjector, YearProjection, MINIMUM_LABEL};
pub use season::{Season, SeasonError};
