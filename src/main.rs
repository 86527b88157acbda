//! Command line entry point for the Wild Horses leaderboards
//!
//! Prints the leaderboard, top snapshot or a member profile for either game,
//! as a plain-text table or JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use wild_horses::config::{validate_config, AppConfig};
use wild_horses::render;
use wild_horses::{Game, Leaderboard, LeaderboardError, Queue, SortDirection};

/// Wild Horses community leaderboards
#[derive(Parser)]
#[command(
    name = "wild-horses",
    version,
    about = "Sort, format and look up the Wild Horses community leaderboards",
    long_about = "Prints the Teamfight Tactics and League of Legends leaderboards of the \
                 Wild Horses roster. Members are ordered by tier, division, LP and finally \
                 by name, and rank numbers stay fixed when the list is filtered."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, global = true, help = "Validate configuration and exit without printing anything")]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full leaderboard
    Leaderboard {
        /// Game (tft or lol)
        #[arg(short, long)]
        game: Option<Game>,
        /// Queue to sort by (ranked, solo or flex)
        #[arg(short, long)]
        queue: Option<Queue>,
        /// Sort direction (desc or asc)
        #[arg(long)]
        direction: Option<SortDirection>,
        /// Only show members whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Print the top of the leaderboard
    Top {
        /// Number of members to show
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,
        /// Game (tft or lol)
        #[arg(short, long)]
        game: Option<Game>,
        /// Queue to sort by (ranked, solo or flex)
        #[arg(short, long)]
        queue: Option<Queue>,
    },
    /// Print one member's profile
    Member {
        /// Exact display name
        name: String,
        /// Game (tft or lol)
        #[arg(short, long)]
        game: Option<Game>,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    validate_config(&config)?;
    Ok(config)
}

/// Queue to use for `game`, rejecting queues the game does not track
fn resolve_queue(game: Game, queue: Option<Queue>) -> Result<Queue> {
    let queue = queue.unwrap_or_else(|| game.default_queue());
    if !game.supports(queue) {
        return Err(LeaderboardError::QueueNotInGame {
            game: game.to_string(),
            queue: queue.to_string(),
        }
        .into());
    }
    Ok(queue)
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let board = Leaderboard::with_static_roster(&config.leaderboard.collation_locale);
    let defaults = &config.leaderboard;

    let collator = board.engine().collator();
    if collator.is_locale_aware() {
        debug!("Ordering names with the {:?} collation", collator.locale());
    } else {
        warn!("Ordering names by code point; locale-aware collation is unavailable");
    }

    match args.command.as_ref() {
        None => {
            let game = defaults.default_game;
            let queue = game.default_queue();
            let rows = board.sorted_leaderboard(game, queue, defaults.default_direction);
            print_rows(args.json, &rows, || render::leaderboard_table(game, queue, &rows))
        }
        Some(Command::Leaderboard {
            game,
            queue,
            direction,
            filter,
        }) => {
            let game = game.unwrap_or(defaults.default_game);
            let queue = resolve_queue(game, *queue)?;
            let direction = direction.unwrap_or(defaults.default_direction);
            let rows = board.search(game, queue, direction, filter.as_deref().unwrap_or(""));
            print_rows(args.json, &rows, || render::leaderboard_table(game, queue, &rows))
        }
        Some(Command::Top { count, game, queue }) => {
            let game = game.unwrap_or(defaults.default_game);
            let queue = resolve_queue(game, *queue)?;
            let rows = board.top_n(count.unwrap_or(defaults.top_n), game, queue);
            print_rows(args.json, &rows, || render::top_list(game, queue, &rows))
        }
        Some(Command::Member { name, game }) => {
            let game = game.unwrap_or(defaults.default_game);
            let profile = board.profile(game, name).ok_or_else(|| {
                LeaderboardError::MemberNotFound { name: name.clone() }
            })?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print!("{}", render::profile_card(&profile));
            }
            Ok(())
        }
    }
}

fn print_rows<T: serde::Serialize>(
    json: bool,
    rows: &[T],
    text: impl FnOnce() -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!(
        "{} v{} (locale {})",
        config.service.name,
        wild_horses::VERSION,
        config.leaderboard.collation_locale
    );

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Dry run completed - exiting");
        return Ok(());
    }

    if let Err(e) = run(&args, &config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["wild-horses", "top", "--dry-run", "--json", "-n", "3"]).unwrap();
        assert!(args.dry_run);
        assert!(args.json);
        assert!(matches!(args.command, Some(Command::Top { count: Some(3), .. })));

        let args = Args::try_parse_from(["wild-horses", "--dry-run"]).unwrap();
        assert!(args.dry_run);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_resolve_queue() {
        assert_eq!(resolve_queue(Game::Lol, None).unwrap(), Queue::Solo);
        assert_eq!(resolve_queue(Game::Tft, None).unwrap(), Queue::Ranked);
        assert!(resolve_queue(Game::Tft, Some(Queue::Flex)).is_err());
    }
}
