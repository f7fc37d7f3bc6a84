use clap::Parser;
use darko_value::cli::{Cli, Commands};
use darko_value::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    darko_value::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Value(args) => {
            tracing::info!(player = %args.player, "Valuing player");
            args.execute(&config)?;
        }
        Commands::Rank(args) => {
            tracing::info!("Ranking surplus");
            args.execute(&config)?;
        }
        Commands::Games(args) => {
            tracing::info!("Projecting season games");
            args.execute()?;
        }
        Commands::MergeStats(args) => {
            tracing::info!(stats = ?args.stats, "Merging season stats");
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Model: {} league minutes, replacement {}, ${}M per win, floor ${}M",
                config.model.league_minutes,
                config.model.replacement_level,
                config.model.dollars_per_win,
                config.model.minimum_salary_floor
            );
            match config.projection.current_season {
                Some(season) => println!("  Season: {}", season),
                None => println!("  Season: (current)"),
            }
            println!(
                "  Projection: {} years, cap growth {}%",
                config.projection.horizon_years,
                config.projection.cap_growth * rust_decimal_macros::dec!(100)
            );
            for (season, scaler) in &config.projection.inflation {
                println!("    {} scaler {}", season, scaler);
            }
            println!(
                "  Ranking: top {}, defaults {} games / {} min",
                config.ranking.top_n, config.ranking.default_games, config.ranking.default_minutes
            );
            println!(
                "  Telemetry: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
