//! Season labels

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Month the regular season opens in
const SEASON_START_MONTH: u32 = 10;

/// Season label parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeasonError {
    /// Label is not in `YYYY-YY` form
    #[error("Malformed season label: {0:?}")]
    Malformed(String),
    /// Second half of the label is not the following year
    #[error("Season {0:?} does not span consecutive years")]
    NotConsecutive(String),
}

/// An NBA season, identified by the year it starts in
///
/// Formats and parses as `2025-26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season {
    start_year: i32,
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Season in progress (or about to start) on the given date
    pub fn current(today: NaiveDate) -> Self {
        if today.month() >= SEASON_START_MONTH {
            Self::new(today.year())
        } else {
            Self::new(today.year() - 1)
        }
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    pub fn offset(&self, seasons: i32) -> Self {
        Self::new(self.start_year + seasons)
    }

    /// The `count` seasons after this one, in order
    pub fn following(&self, count: usize) -> Vec<Season> {
        (1..=count as i32).map(|k| self.offset(k)).collect()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}",
            self.start_year,
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

impl FromStr for Season {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SeasonError::Malformed(s.to_string());

        let (start, end) = s.trim().split_once('-').ok_or_else(malformed)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(malformed());
        }
        let start_year: i32 = start.parse().map_err(|_| malformed())?;
        let end_suffix: i32 = end.parse().map_err(|_| malformed())?;

        if (start_year + 1).rem_euclid(100) != end_suffix {
            return Err(SeasonError::NotConsecutive(s.to_string()));
        }
        Ok(Self::new(start_year))
    }
}

impl serde::Serialize for Season {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Season {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
