//! DARKO salary pricing formula
//!
//! value = (games * minutes / league_minutes) * (rating - replacement_level) * dollars_per_win
//!
//! then scaled by a symmetric boost (positive ratings) or penalty (negative ratings)
//! of at most 10%. Anything under the minimum salary floor collapses to the
//! [`Valuation::MinimumSalary`] sentinel.

use super::{PricingParams, Valuation, ValuationModel};
use crate::config::ModelConfig;
use rust_decimal::Decimal;

const BOOST_DIVISOR: f64 = 4.0;
const BOOST_EXPONENT: f64 = 1.2;
const BOOST_SCALE: f64 = 0.1;
const BOOST_CAP: f64 = 0.1;

/// Boost (or penalty) fraction applied for a given adjusted rating
///
/// Symmetric in sign and capped at 10%.
pub fn boost_factor(adjusted_rating: f64) -> f64 {
    let scaled = (adjusted_rating.abs() / BOOST_DIVISOR).powf(BOOST_EXPONENT) * BOOST_SCALE;
    scaled.min(BOOST_CAP)
}

/// Value a season with the reference-season model
pub fn valuate(games: f64, minutes: f64, rating: f64, adjustment: f64) -> Valuation {
    DarkoModel::default().valuate(PricingParams::new(games, minutes, rating, adjustment))
}

/// Minutes/rating pricing model calibrated on a reference season
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarkoModel {
    /// Season minutes of an average non-replacement player
    pub league_minutes: f64,
    /// Rating that is worth nothing above a minimum contract
    pub replacement_level: f64,
    /// Dollar value of one win, in millions
    pub dollars_per_win: f64,
    /// Valuations below this collapse to the minimum salary
    pub minimum_salary_floor: f64,
}

impl DarkoModel {
    pub fn new(
        league_minutes: f64,
        replacement_level: f64,
        dollars_per_win: f64,
        minimum_salary_floor: f64,
    ) -> Self {
        Self {
            league_minutes,
            replacement_level,
            dollars_per_win,
            minimum_salary_floor,
        }
    }

    /// Create from ModelConfig
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(
            config.league_minutes,
            config.replacement_level,
            config.dollars_per_win,
            config.minimum_salary_floor,
        )
    }

    /// Unrounded valuation before the minimum salary floor is applied
    pub fn raw_value(&self, params: &PricingParams) -> f64 {
        let adjusted = params.adjusted_rating();
        let share = params.games * params.minutes / self.league_minutes;
        let base = share * (adjusted - self.replacement_level) * self.dollars_per_win;

        let boost = boost_factor(adjusted);
        if adjusted > 0.0 {
            base * (1.0 + boost)
        } else if adjusted < 0.0 {
            base * (1.0 - boost)
        } else {
            base
        }
    }
}

impl Default for DarkoModel {
    fn default() -> Self {
        Self {
            league_minutes: 1475.0,
            replacement_level: -3.0,
            dollars_per_win: 4.32,
            minimum_salary_floor: 3.0,
        }
    }
}

impl ValuationModel for DarkoModel {
    fn valuate(&self, params: PricingParams) -> Valuation {
        let value = self.raw_value(&params);

        if !value.is_finite() || value < self.minimum_salary_floor {
            return Valuation::MinimumSalary;
        }

        let rounded = (value * 10.0).round() / 10.0;
        match Decimal::try_from(rounded) {
            Ok(amount) => Valuation::Dollars(amount.round_dp(1)),
            Err(_) => Valuation::MinimumSalary,
        }
    }
}
