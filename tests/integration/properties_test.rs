//! Property tests for pricing, aging, and games projection

use darko_value::model::{aging_delta, boost_factor, cumulative_aging, valuate};
use darko_value::projection::project_season_games;
use darko_value::roster::SEASON_GAMES;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn worth(games: f64, minutes: f64, rating: f64) -> Decimal {
    valuate(games, minutes, rating, 0.0).amount_or(Decimal::ZERO)
}

proptest! {
    #[test]
    fn prop_value_grows_with_games(
        games in 1u32..82,
        extra in 1u32..40,
        minutes in 0.0f64..48.0,
        rating in -3.0f64..12.0,
    ) {
        let more = (games + extra).min(SEASON_GAMES);
        prop_assert!(worth(more as f64, minutes, rating) >= worth(games as f64, minutes, rating));
    }

    #[test]
    fn prop_value_grows_with_minutes(
        games in 1u32..=82,
        minutes in 0.0f64..40.0,
        extra in 0.0f64..8.0,
        rating in -3.0f64..12.0,
    ) {
        let g = games as f64;
        prop_assert!(worth(g, minutes + extra, rating) >= worth(g, minutes, rating));
    }

    #[test]
    fn prop_boost_symmetric_and_capped(rating in -50.0f64..50.0) {
        let boost = boost_factor(rating);
        prop_assert_eq!(boost, boost_factor(-rating));
        prop_assert!((0.0..=0.1).contains(&boost));
    }

    #[test]
    fn prop_valuation_has_one_decimal(
        games in 1u32..=82,
        minutes in 0.0f64..=48.0,
        rating in -5.0f64..10.0,
        adjustment in -5.0f64..=5.0,
    ) {
        if let Some(amount) = valuate(games as f64, minutes, rating, adjustment).amount() {
            prop_assert_eq!(amount, amount.round_dp(1));
            prop_assert!(amount >= Decimal::new(30, 1));
        }
    }

    #[test]
    fn prop_aging_never_improves_with_age(age in 0u32..60) {
        prop_assert!(aging_delta(age + 1) <= aging_delta(age));
    }

    #[test]
    fn prop_cumulative_aging_adds_one_season(age in 18u32..40, seasons in 0u32..10) {
        prop_assert_eq!(
            cumulative_aging(age, seasons + 1),
            cumulative_aging(age, seasons) + aging_delta(age + seasons)
        );
    }

    #[test]
    fn prop_no_games_played_projects_zero(
        progress in 1u32..=82,
        recent in proptest::option::of(0u32..=10),
    ) {
        prop_assert_eq!(project_season_games(0, progress, recent), 0);
    }

    #[test]
    fn prop_season_not_started_projects_full(
        games in 0u32..=82,
        recent in proptest::option::of(0u32..=10),
    ) {
        prop_assert_eq!(project_season_games(games, 0, recent), SEASON_GAMES);
    }

    #[test]
    fn prop_healthy_projection_not_below_standard(
        progress in 1u32..=82,
        played in 1u32..=82,
        recent in 5u32..=10,
    ) {
        let played = played.min(progress);
        let standard = project_season_games(played, progress, None);
        prop_assert!(project_season_games(played, progress, Some(recent)) >= standard);
    }

    #[test]
    fn prop_projection_within_season(
        progress in 1u32..=82,
        played in 1u32..=82,
        recent in proptest::option::of(0u32..=10),
    ) {
        let played = played.min(progress);
        prop_assert!(project_season_games(played, progress, recent) <= SEASON_GAMES);
    }
}
