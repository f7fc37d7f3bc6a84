//! End-to-end valuation pipeline tests

use darko_value::model::Valuation;
use darko_value::projection::{with_projected_games, InflationSchedule, MultiYearProjector, Season};
use darko_value::ranking::{DefaultSettings, OverrideSettings, SurplusRanker};
use darko_value::roster::{load_roster, Player, ValuationInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ROSTER: &str = r#"[
    {
        "name": "Franchise Star",
        "team": "PHO",
        "age": 25,
        "darko": 3.0,
        "actualSalary": 30,
        "futureSalaries": { "2026-27": 32.0, "2027-28": 34.0 },
        "avgMinutes": 30.0,
        "gamesPlayed": 53
    },
    {
        "name": "Returning Guard",
        "team": "PHX",
        "age": 27,
        "darko": 0.0,
        "actualSalary": 25,
        "avgMinutes": 30.0,
        "gamesPlayed": 23,
        "recentGamesPlayed": 9
    },
    {
        "name": "Injured Veteran",
        "team": "BOS",
        "age": 34,
        "darko": -1.0,
        "actualSalary": 20
    },
    {
        "name": "Unsigned Rookie",
        "team": "BOS",
        "age": 20,
        "darko": 1.0,
        "actualSalary": 0,
        "avgMinutes": 18.0,
        "gamesPlayed": 30
    }
]"#;

fn roster() -> Vec<Player> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.json");
    std::fs::write(&path, ROSTER).unwrap();
    with_projected_games(&load_roster(&path).unwrap())
}

#[test]
fn test_games_projection_from_roster() {
    let players = roster();
    // season progress is 53 games
    assert_eq!(players[0].projected_games, Some(82));
    assert_eq!(players[1].projected_games, Some(49));
    assert_eq!(players[2].projected_games, None);
    assert_eq!(players[3].projected_games, Some(46));
}

#[test]
fn test_leaderboards_from_roster() {
    let players = roster();
    let ranker: SurplusRanker = SurplusRanker::default();
    let boards = ranker.rank(&players, &DefaultSettings::default());

    // rookie is a free agent, veteran has not played
    let ranked: Vec<&str> = boards
        .undervalued_players
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(ranked, vec!["Franchise Star", "Returning Guard"]);

    // PHO and PHX collapse into one team
    let teams: Vec<&str> = boards
        .undervalued_teams
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(teams, vec!["PHX", "BOS"]);

    // PHX: 16.3 - 12.1; the veteran falls back to 70 games, 30 minutes
    assert_eq!(boards.undervalued_teams[0].surplus, dec!(4.2));
    assert_eq!(boards.overvalued_teams[0].name, "BOS");
    assert_eq!(boards.overvalued_teams[0].surplus, dec!(-7.9));
}

#[test]
fn test_user_override_changes_ranking() {
    let players = roster();
    let ranker: SurplusRanker = SurplusRanker::default();
    let settings = OverrideSettings::new(DefaultSettings::default())
        .with_override("Returning Guard", ValuationInput::new(82, 36.0, 3.0));

    let boards = ranker.rank(&players, &settings);
    assert_eq!(boards.undervalued_players[0].name, "Returning Guard");
}

#[test]
fn test_star_projection_from_roster() {
    let players = roster();
    let star = &players[0];
    let current = Season::new(2025);
    let input = ValuationInput::new(70, 30.0, 0.0);

    let projector: MultiYearProjector = MultiYearProjector::default();
    let projection = projector.project(
        star,
        &input,
        &current.following(5),
        &InflationSchedule::flat(),
    );

    assert_eq!(projection.current, Valuation::Dollars(dec!(39.5)));
    assert_eq!(projection.current_surplus, dec!(9.5));
    assert_eq!(projection.years.len(), 5);
    assert_eq!(projection.years[0].actual_salary, Some(dec!(32.0)));
    assert_eq!(projection.years[2].actual_salary, None);
    assert_eq!(projection.years[2].surplus, Decimal::ZERO);

    let contracted: Decimal = projection
        .years
        .iter()
        .filter(|y| y.actual_salary.is_some())
        .map(|y| y.surplus)
        .sum();
    assert_eq!(
        projection.cumulative_surplus,
        projection.current_surplus + contracted
    );
}

#[test]
fn test_no_future_contracts_keeps_current_surplus() {
    let player = Player::new("Expiring", "MIA", 29, 1.5, dec!(22));
    let current = Season::new(2025);
    let input = ValuationInput::new(75, 32.0, 0.0);
    let projector: MultiYearProjector = MultiYearProjector::default();

    let projection = projector.project(
        &player,
        &input,
        &current.following(5),
        &InflationSchedule::compounding(current, 5, dec!(0.10)),
    );

    assert_eq!(projection.years.len(), 5);
    assert!(projection.years.iter().all(|y| y.surplus == Decimal::ZERO));
    assert_eq!(projection.cumulative_surplus, projection.current_surplus);
}
