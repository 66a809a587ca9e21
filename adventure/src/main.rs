//! Binary entrypoint for the text adventure.
//!
//! Options:
//! - `--config <path>` - read settings from a TOML file
//! - `--save-file <path>` - override where the game is saved
//! - `--instant` - print text immediately, no typewriter effect
//! - `-v` / `-vv` / `-vvv` - log more to stderr
use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::io;
use std::path::PathBuf;

use narrative_core::{Game, JsonFileStore};

mod config;
mod terminal;

use config::GameConfig;
use terminal::TerminalConsole;

#[derive(Parser)]
#[command(name = "adventure")]
#[command(about = "A small text adventure: find the key, dodge the creature, escape")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save file path (overrides the config file)
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Print narration instantly
    #[arg(long)]
    instant: bool,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(path) = cli.save_file {
        config.save_file = path;
    }
    if cli.instant {
        config = config.instant();
    }
    info!("saving to {}", config.save_file.display());

    let console = TerminalConsole::new(io::stdin().lock(), io::stdout(), &config);
    let store = JsonFileStore::new(&config.save_file);
    let ending = Game::new(console, store).run();
    debug!("session ended: {ending:?}");

    Ok(())
}

/// Logs go to stderr so they never mix with narration. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
