//! Surplus leaderboards
//!
//! Surplus is valuation minus salary. Free agents carry no contract and are
//! left out of every total. Players who have not played are kept out of the
//! player boards but still count toward their team, so team totals reflect
//! the whole payroll.

use super::SettingsResolver;
use crate::model::{DarkoModel, ValuationModel};
use crate::roster::{canonical_team, Player};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;

/// Value credited to a minimum-salary valuation when ranking
pub const RANKING_MINIMUM_PROXY: Decimal = dec!(2.0);

/// Leaderboard length when none is configured
pub const DEFAULT_TOP_N: usize = 10;

/// A player or team with its aggregate surplus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurplusEntry {
    /// Player name or canonical team code
    pub name: String,
    pub surplus: Decimal,
}

impl SurplusEntry {
    pub fn new(name: impl Into<String>, surplus: Decimal) -> Self {
        Self {
            name: name.into(),
            surplus,
        }
    }
}

/// The four surplus leaderboards
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboards {
    /// Most negative player surplus first
    pub overvalued_players: Vec<SurplusEntry>,
    /// Most positive player surplus first
    pub undervalued_players: Vec<SurplusEntry>,
    pub overvalued_teams: Vec<SurplusEntry>,
    pub undervalued_teams: Vec<SurplusEntry>,
}

/// Ranks players and teams by surplus value
#[derive(Debug, Clone)]
pub struct SurplusRanker<M = DarkoModel> {
    model: M,
    top_n: usize,
}

impl Default for SurplusRanker {
    fn default() -> Self {
        Self::new(DarkoModel::default(), DEFAULT_TOP_N)
    }
}

impl<M: ValuationModel> SurplusRanker<M> {
    pub fn new(model: M, top_n: usize) -> Self {
        Self { model, top_n }
    }

    /// Surplus for a single player, `None` for free agents
    pub fn player_surplus<R: SettingsResolver + ?Sized>(
        &self,
        player: &Player,
        resolver: &R,
    ) -> Option<Decimal> {
        if player.is_free_agent() {
            return None;
        }
        let input = resolver.resolve(player);
        let valuation = self.model.valuate(input.pricing_params(player.darko));
        Some(valuation.amount_or(RANKING_MINIMUM_PROXY) - player.actual_salary)
    }

    /// Build all four leaderboards
    pub fn rank<R: SettingsResolver + ?Sized>(
        &self,
        players: &[Player],
        resolver: &R,
    ) -> Leaderboards {
        let mut player_entries = Vec::new();
        let mut team_entries: Vec<SurplusEntry> = Vec::new();
        let mut team_index: HashMap<String, usize> = HashMap::new();

        for player in players {
            let Some(surplus) = self.player_surplus(player, resolver) else {
                continue;
            };

            if player.has_played() {
                player_entries.push(SurplusEntry::new(player.name.clone(), surplus));
            }

            let team = canonical_team(&player.team);
            match team_index.get(&team) {
                Some(&i) => team_entries[i].surplus += surplus,
                None => {
                    team_index.insert(team.clone(), team_entries.len());
                    team_entries.push(SurplusEntry::new(team, surplus));
                }
            }
        }

        tracing::debug!(
            players = players.len(),
            ranked_players = player_entries.len(),
            teams = team_entries.len(),
            "Ranked surplus"
        );

        Leaderboards {
            overvalued_players: self.top(&player_entries, ascending),
            undervalued_players: self.top(&player_entries, descending),
            overvalued_teams: self.top(&team_entries, ascending),
            undervalued_teams: self.top(&team_entries, descending),
        }
    }

    fn top(
        &self,
        entries: &[SurplusEntry],
        order: fn(&SurplusEntry, &SurplusEntry) -> std::cmp::Ordering,
    ) -> Vec<SurplusEntry> {
        let mut sorted = entries.to_vec();
        sorted.sort_by(order);
        sorted.truncate(self.top_n);
        sorted
    }
}

fn ascending(a: &SurplusEntry, b: &SurplusEntry) -> std::cmp::Ordering {
    a.surplus.cmp(&b.surplus)
}

fn descending(a: &SurplusEntry, b: &SurplusEntry) -> std::cmp::Ordering {
    b.surplus.cmp(&a.surplus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::DefaultSettings;
    use crate::roster::ValuationInput;

    /// Resolver that values everyone at 70 games, 30 minutes
    struct Fixed;

    impl SettingsResolver for Fixed {
        fn resolve(&self, _player: &Player) -> ValuationInput {
            ValuationInput::new(70, 30.0, 0.0)
        }
    }

    fn ranker() -> SurplusRanker {
        SurplusRanker::default()
    }

    fn played(name: &str, team: &str, darko: f64, salary: Decimal) -> Player {
        Player::new(name, team, 26, darko, salary).with_season_stats(30.0, 40)
    }

    #[test]
    fn test_player_surplus() {
        let ranker = ranker();
        // valued at 39.5
        let player = played("Star", "DEN", 3.0, dec!(30));
        assert_eq!(ranker.player_surplus(&player, &Fixed), Some(dec!(9.5)));
    }

    #[test]
    fn test_minimum_salary_proxy() {
        let ranker = ranker();
        let player = played("Bench", "DEN", -4.0, dec!(5));
        assert_eq!(ranker.player_surplus(&player, &Fixed), Some(dec!(-3.0)));
    }

    #[test]
    fn test_free_agent_excluded() {
        let ranker = ranker();
        let free_agent = played("FA", "DEN", 3.0, Decimal::ZERO);
        assert_eq!(ranker.player_surplus(&free_agent, &Fixed), None);

        let boards = ranker.rank(&[free_agent], &Fixed);
        assert_eq!(boards, Leaderboards::default());
    }

    #[test]
    fn test_leaderboard_order() {
        let ranker = ranker();
        let players = vec![
            played("Fair", "BOS", 0.0, dec!(18.5)),   // 0.0
            played("Bargain", "BOS", 3.0, dec!(10)),  // +29.5
            played("Overpaid", "LAL", 0.0, dec!(40)), // -21.5
            played("Slight", "LAL", 2.0, dec!(30)),   // +2.1
        ];

        let boards = ranker.rank(&players, &Fixed);

        let over: Vec<&str> = boards
            .overvalued_players
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(over, vec!["Overpaid", "Fair", "Slight", "Bargain"]);

        let under: Vec<&str> = boards
            .undervalued_players
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(under, vec!["Bargain", "Slight", "Fair", "Overpaid"]);

        assert_eq!(
            boards.undervalued_teams,
            vec![
                SurplusEntry::new("BOS", dec!(29.5)),
                SurplusEntry::new("LAL", dec!(-19.4)),
            ]
        );
        assert_eq!(boards.overvalued_teams[0], SurplusEntry::new("LAL", dec!(-19.4)));
    }

    #[test]
    fn test_unplayed_players_count_for_team_only() {
        let ranker = ranker();
        let players = vec![
            played("Starter", "PHX", 3.0, dec!(30)),
            Player::new("Injured", "PHO", 26, 0.0, dec!(20)),
        ];

        let boards = ranker.rank(&players, &Fixed);

        assert_eq!(boards.undervalued_players.len(), 1);
        assert_eq!(boards.undervalued_players[0].name, "Starter");
        // 9.5 + (18.5 - 20), aliases grouped under PHX
        assert_eq!(
            boards.undervalued_teams,
            vec![SurplusEntry::new("PHX", dec!(8.0))]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranker = ranker();
        let players = vec![
            played("First", "BOS", 0.0, dec!(10)),
            played("Second", "NYK", 0.0, dec!(10)),
            played("Third", "MIA", 0.0, dec!(10)),
        ];

        let boards = ranker.rank(&players, &Fixed);
        fn names(entries: &[SurplusEntry]) -> Vec<String> {
            entries.iter().map(|e| e.name.clone()).collect()
        }

        assert_eq!(names(&boards.overvalued_players), vec!["First", "Second", "Third"]);
        assert_eq!(names(&boards.undervalued_players), vec!["First", "Second", "Third"]);
        assert_eq!(names(&boards.undervalued_teams), vec!["BOS", "NYK", "MIA"]);
    }

    #[test]
    fn test_top_n_truncates() {
        let ranker = SurplusRanker::new(DarkoModel::default(), 2);
        let players: Vec<Player> = (0..5)
            .map(|i| played(&format!("P{i}"), "BOS", i as f64, dec!(15)))
            .collect();

        let boards = ranker.rank(&players, &Fixed);
        assert_eq!(boards.overvalued_players.len(), 2);
        assert_eq!(boards.undervalued_players[0].name, "P4");
        assert_eq!(boards.overvalued_players[0].name, "P0");
        assert_eq!(boards.undervalued_teams.len(), 1);
    }

    #[test]
    fn test_rank_with_default_settings() {
        let ranker = ranker();
        let mut player = played("Star", "DEN", 3.0, dec!(30));
        player.projected_games = Some(70);
        player.avg_minutes = Some(30.0);

        let boards = ranker.rank(&[player], &DefaultSettings::default());
        assert_eq!(boards.undervalued_players[0].surplus, dec!(9.5));
    }
}
