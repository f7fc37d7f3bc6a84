//! Value command implementation

use crate::config::Config;
use crate::model::DarkoModel;
use crate::projection::{with_projected_games, MultiYearProjection, MultiYearProjector, Season};
use crate::ranking::{DefaultSettings, SettingsResolver};
use crate::roster::{load_roster, Player, ValuationInput};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Roster JSON file
    #[arg(long, default_value = "players.json")]
    pub roster: PathBuf,

    /// Player name, exactly as stored
    #[arg(long)]
    pub player: String,

    /// Season games (1-82); projected games when omitted
    #[arg(long)]
    pub games: Option<u32>,

    /// Minutes per game (0-48); season average when omitted
    #[arg(long)]
    pub minutes: Option<f64>,

    /// Rating adjustment (-5 to 5)
    #[arg(long, allow_negative_numbers = true)]
    pub adjust: Option<f64>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ValueArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let players = with_projected_games(&load_roster(&self.roster)?);
        tracing::info!(players = players.len(), roster = ?self.roster, "Loaded roster");

        let player = players
            .iter()
            .find(|p| p.name == self.player)
            .ok_or_else(|| anyhow::anyhow!("Player not found: {}", self.player))?;

        let defaults = DefaultSettings::from_config(&config.ranking).resolve(player);
        let input = ValuationInput::clamped(
            self.games.unwrap_or(defaults.games),
            self.minutes.unwrap_or(defaults.minutes),
            self.adjust.unwrap_or(defaults.adjustment),
        );

        let current = config.projection.season(chrono::Utc::now().date_naive());
        let seasons = config.projection.future_seasons(current);
        let inflation = config.projection.inflation_schedule(current);

        let projector = MultiYearProjector::new(DarkoModel::from_config(&config.model));
        let projection = projector.project(player, &input, &seasons, &inflation);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&projection)?);
        } else {
            print!("{}", format_projection(player, &input, current, &projection));
        }
        Ok(())
    }
}

/// Format a projection as a table for CLI output
pub fn format_projection(
    player: &Player,
    input: &ValuationInput,
    current: Season,
    projection: &MultiYearProjection,
) -> String {
    let salary = if player.is_free_agent() {
        "FA".to_string()
    } else {
        format!("${:.1}M", player.actual_salary)
    };

    let mut out = format!(
        r#"══════════════════════════════════════════════════════
{} ({}, age {}, DARKO {:+.2})
{} games, {:.1} min, adjustment {:+.1}
══════════════════════════════════════════════════════
{:<9} {:>4} {:>10} {:>10} {:>9}
───────────────────────────────────────────────────────
{:<9} {:>4} {:>10} {:>10} {:>+9.1}
"#,
        player.name,
        player.team,
        player.age,
        player.darko,
        input.games,
        input.minutes,
        input.adjustment,
        "SEASON",
        "AGE",
        "VALUE",
        "SALARY",
        "SURPLUS",
        current.to_string(),
        player.age,
        projection.current.to_string(),
        salary,
        projection.current_surplus,
    );

    for year in &projection.years {
        let (salary, surplus) = match year.actual_salary {
            Some(salary) => (format!("${:.1}M", salary), format!("{:+.1}", year.surplus)),
            None => ("-".to_string(), "-".to_string()),
        };
        out.push_str(&format!(
            "{:<9} {:>4} {:>10} {:>10} {:>9}\n",
            year.season.to_string(),
            year.age,
            year.label,
            salary,
            surplus
        ));
    }

    out.push_str(&format!(
        r#"───────────────────────────────────────────────────────
Cumulative surplus: {:+.1}
══════════════════════════════════════════════════════
"#,
        projection.cumulative_surplus
    ));
    out
}
