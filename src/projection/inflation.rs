//! Salary inflation scalers by season

use super::Season;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Multipliers that convert reference-season dollars into a future season's dollars
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InflationSchedule {
    scalers: BTreeMap<Season, Decimal>,
}

impl InflationSchedule {
    /// Schedule with no inflation in any season
    pub fn flat() -> Self {
        Self::default()
    }

    /// Compound `growth` once per season after `base`
    ///
    /// The k-th season after `base` scales by `(1 + growth)^k`.
    pub fn compounding(base: Season, horizon: usize, growth: Decimal) -> Self {
        let step = Decimal::ONE + growth;
        let mut scaler = Decimal::ONE;
        let mut scalers = BTreeMap::new();
        for season in base.following(horizon) {
            scaler *= step;
            scalers.insert(season, scaler);
        }
        Self { scalers }
    }

    /// Replace the scaler for one season
    pub fn with_scaler(mut self, season: Season, scaler: Decimal) -> Self {
        self.scalers.insert(season, scaler);
        self
    }

    /// Replace scalers for every season in `overrides`
    pub fn with_overrides(mut self, overrides: &BTreeMap<Season, Decimal>) -> Self {
        self.scalers
            .extend(overrides.iter().map(|(season, scaler)| (*season, *scaler)));
        self
    }

    /// Scaler for a season, 1 when the season is not scheduled
    pub fn scaler(&self, season: Season) -> Decimal {
        self.scalers.get(&season).copied().unwrap_or(Decimal::ONE)
    }
}
