use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::grid::{DEFAULT_SIZE, MIN_SIZE};
use crate::engine::Session;
use crate::error::Result;

/// Slide numbered tiles around a square board, merging equal neighbours, until no move is left.
#[derive(Debug, Parser)]
#[command(name = "slide48", version, about)]
pub struct Cli {
    /// Number of rows and columns on the board.
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    pub size: usize,

    /// Seed for the tile spawner; the same seed and the same moves replay the same game.
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives the log output while the terminal is in raw mode.
    #[arg(long, default_value = "slide48.log")]
    pub log_file: PathBuf,

    /// How long the final board stays on screen once the game is over, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    pub linger_ms: u64,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Cli {
    pub fn linger(&self) -> Duration {
        Duration::from_millis(self.linger_ms)
    }

    /// A fresh session of the requested size, seeded from `--seed` when one was given.
    pub fn session(&self) -> Result<Session> {
        let rng = match self.seed {
            Some(seed) => {
                log::info!("seeding tile spawner with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Ok(Session::new(self.size, rng)?)
    }
}

fn parse_size(s: &str) -> std::result::Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|e| format!("`{s}` is not a board size: {e}"))?;
    if size < MIN_SIZE {
        return Err(format!("board size must be at least {MIN_SIZE}"));
    }
    Ok(size)
}
