//! Aging curve
//!
//! Expected one-season change in DARKO rating from age alone, as a step
//! function over age brackets.

/// Expected rating change over the season a player starts at `age`
pub fn aging_delta(age: u32) -> f64 {
    match age {
        0..=20 => 0.65,
        21 => 0.5,
        22 => 0.45,
        23 => 0.4,
        24..=26 => 0.1,
        27 | 28 => 0.0,
        29 => -0.05,
        30 => -0.1,
        31 => -0.2,
        32 => -0.3,
        33 => -0.45,
        34 => -0.65,
        35 => -0.9,
        _ => -1.2,
    }
}

/// Total rating change over `seasons` seasons starting at `age`
///
/// Each season contributes the delta for the age held at its start.
pub fn cumulative_aging(age: u32, seasons: u32) -> f64 {
    (0..seasons).map(|i| aging_delta(age.saturating_add(i))).sum()
}
