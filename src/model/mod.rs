//! Valuation model module
//!
//! Converts a DARKO rating and playing-time assumptions into a salary valuation,
//! and ages ratings forward one season at a time.

mod aging;
mod pricing;

pub use aging::{aging_delta, cumulative_aging};
pub use pricing::{boost_factor, valuate, DarkoModel};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for a single valuation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingParams {
    /// Games assumed for the season
    pub games: f64,
    /// Minutes assumed per game
    pub minutes: f64,
    /// DARKO rating before any user adjustment
    pub rating: f64,
    /// User override added to the rating
    pub adjustment: f64,
}

impl PricingParams {
    pub fn new(games: f64, minutes: f64, rating: f64, adjustment: f64) -> Self {
        Self {
            games,
            minutes,
            rating,
            adjustment,
        }
    }

    /// Rating after the user adjustment is applied
    pub fn adjusted_rating(&self) -> f64 {
        self.rating + self.adjustment
    }
}

/// Result of a valuation, in millions of dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Valuation {
    /// Valuation rounded to one decimal place
    Dollars(Decimal),
    /// Value fell under the minimum salary floor
    MinimumSalary,
}

impl Valuation {
    /// Dollar amount, if the valuation cleared the floor
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Valuation::Dollars(amount) => Some(*amount),
            Valuation::MinimumSalary => None,
        }
    }

    /// Dollar amount, substituting `proxy` for the minimum salary sentinel
    pub fn amount_or(&self, proxy: Decimal) -> Decimal {
        self.amount().unwrap_or(proxy)
    }

    pub fn is_minimum(&self) -> bool {
        matches!(self, Valuation::MinimumSalary)
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valuation::Dollars(amount) => write!(f, "${:.1}M", amount),
            Valuation::MinimumSalary => write!(f, "Min. Salary"),
        }
    }
}

/// Trait for salary valuation model implementations
pub trait ValuationModel: Send + Sync {
    /// Value a player season given playing time and rating
    fn valuate(&self, params: PricingParams) -> Valuation;
}
