//! Multi-season valuation trajectory
//!
//! Ages the player's rating forward one season at a time, prices each season
//! with the valuation model, inflates the result into that season's dollars,
//! and accumulates surplus against any known future contract.

use super::{InflationSchedule, Season};
use crate::model::{cumulative_aging, DarkoModel, PricingParams, Valuation, ValuationModel};
use crate::roster::{Player, ValuationInput};
use rust_decimal::Decimal;
use serde::Serialize;

/// Label shown for a future season valued at the minimum salary
pub const MINIMUM_LABEL: &str = "MIN";

/// Projection for one future season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearProjection {
    pub season: Season,
    /// Age at the start of the season
    pub age: u32,
    /// Adjusted rating after aging
    pub rating: f64,
    /// Valuation in reference-season dollars
    pub valuation: Valuation,
    /// Valuation in the season's own dollars, unrounded, 0 at the minimum salary
    pub inflated_value: Decimal,
    /// Display label: `$X.YM` or `MIN`
    pub label: String,
    /// Contracted salary for the season, if known
    pub actual_salary: Option<Decimal>,
    /// Inflated value minus contract, 0 when no contract is known
    pub surplus: Decimal,
}

/// Current-season valuation followed by the future-season trajectory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiYearProjection {
    pub current: Valuation,
    /// Current valuation minus current salary, 0 for free agents
    pub current_surplus: Decimal,
    pub years: Vec<YearProjection>,
    /// Current surplus plus every contracted year's surplus
    pub cumulative_surplus: Decimal,
}

/// Projects valuations across future seasons
#[derive(Debug, Clone, Default)]
pub struct MultiYearProjector<M = DarkoModel> {
    model: M,
}

impl<M: ValuationModel> MultiYearProjector<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Project `player` over `seasons`, the k-th entry being k seasons ahead
    pub fn project(
        &self,
        player: &Player,
        input: &ValuationInput,
        seasons: &[Season],
        inflation: &InflationSchedule,
    ) -> MultiYearProjection {
        let current = self.model.valuate(input.pricing_params(player.darko));
        let current_surplus = if player.is_free_agent() {
            Decimal::ZERO
        } else {
            current.amount_or(Decimal::ZERO) - player.actual_salary
        };

        let years: Vec<YearProjection> = seasons
            .iter()
            .enumerate()
            .map(|(i, season)| {
                self.project_year(player, input, *season, i as u32 + 1, inflation)
            })
            .collect();

        let cumulative_surplus = years
            .iter()
            .filter(|year| year.actual_salary.is_some())
            .fold(current_surplus, |total, year| total + year.surplus);

        tracing::debug!(
            player = %player.name,
            seasons = years.len(),
            cumulative_surplus = %cumulative_surplus,
            "Projected multi-year valuation"
        );

        MultiYearProjection {
            current,
            current_surplus,
            years,
            cumulative_surplus,
        }
    }

    fn project_year(
        &self,
        player: &Player,
        input: &ValuationInput,
        season: Season,
        offset: u32,
        inflation: &InflationSchedule,
    ) -> YearProjection {
        let rating = player.darko + input.adjustment + cumulative_aging(player.age, offset);

        // adjustment is already folded into the aged rating
        let valuation = self.model.valuate(PricingParams::new(
            input.games as f64,
            input.minutes,
            rating,
            0.0,
        ));

        let (inflated_value, label) = match valuation {
            Valuation::Dollars(amount) => {
                let inflated = amount * inflation.scaler(season);
                (inflated, format!("${:.1}M", inflated.round_dp(1)))
            }
            Valuation::MinimumSalary => (Decimal::ZERO, MINIMUM_LABEL.to_string()),
        };

        let actual_salary = player.future_salary(season);
        let surplus = actual_salary
            .map(|salary| inflated_value - salary)
            .unwrap_or(Decimal::ZERO);

        YearProjection {
            season,
            age: player.age.saturating_add(offset),
            rating,
            valuation,
            inflated_value,
            label,
            actual_salary,
            surplus,
        }
    }
}
