use std::io;

use clap::Parser;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{init_logging, run_cli, GameConfig, DEFAULT_COMMAND};

#[derive(Parser)]
#[command(author, version, about = "Tic-tac-toe in the terminal", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible random moves (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Keep earlier screens visible and log at debug level.
    #[arg(long)]
    debug: bool,
    /// Command letter to run when the player just presses enter.
    #[arg(long, default_value_t = DEFAULT_COMMAND)]
    default_command: char,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = GameConfig::new(cli.default_command, !cli.debug);
    let stdin = io::stdin();
    let session = run_cli(stdin.lock(), io::stdout().lock(), &config, &mut rng)?;
    log::debug!("session ended after {} events", session.log().len());
    Ok(())
}
