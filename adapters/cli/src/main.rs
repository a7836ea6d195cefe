#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Hunt the Wumpus in a terminal.

mod config;
mod console;
mod messages;

use std::{io, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;
use wumpus_system_hunt::Hunt;
use wumpus_world::{query, World};

use crate::{config::Config, console::ConsolePlayer};

#[derive(Debug, Parser)]
#[command(name = "wumpus")]
#[command(about = "Hunt the wumpus through a cave of twenty rooms")]
struct CliArgs {
    /// Seed for the cave's random source; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with a `[hunt]` table of rules and an optional seed.
    #[arg(long, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Skip the introduction printed before the hunt.
    #[arg(long)]
    skip_intro: bool,

    /// Trace world activity on stderr; repeat for arrow and bat detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs the stderr subscriber; `RUST_LOG` overrides the verbosity flag.
fn install_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to install tracing subscriber: {error}"))
}

/// Entry point for the Hunt the Wumpus command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    install_tracing(args.verbose)?;

    let config = match &args.rules {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    tracing::info!("cave seed {seed}");

    let mut world = World::with_rules(config.hunt, ChaCha8Rng::seed_from_u64(seed))
        .context("failed to build the cave")?;

    let stdin = io::stdin();
    let mut player = ConsolePlayer::new(stdin.lock(), io::stdout(), config.hunt.arrow_range);
    if !args.skip_intro {
        player.show(&messages::game_info(
            query::welcome_banner(&world),
            query::rules(&world),
        ))?;
    }

    let outcome = Hunt::default()
        .run(&mut world, &mut player)
        .context("hunt interrupted")?;
    tracing::debug!("hunt over: {outcome:?}");
    Ok(())
}
