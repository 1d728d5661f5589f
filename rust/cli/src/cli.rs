//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Heads-up Texas Hold'em for two players at one terminal"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a hot-seat game
    Play {
        /// Name of the first player (acts first in round 1)
        #[arg(long)]
        p1: Option<String>,
        /// Name of the second player
        #[arg(long)]
        p2: Option<String>,
        /// Starting stack for both players
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        stack: Option<u32>,
        /// Deck seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, requires = "big_blind")]
        small_blind: Option<u32>,
        #[arg(long, requires = "small_blind")]
        big_blind: Option<u32>,
        /// Stop after this many rounds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
    },
    /// Evaluate 2 to 7 cards, e.g. `holdem eval Qd Kh 10d 9d 8c`
    Eval {
        #[arg(required = true, num_args = 2..=7)]
        cards: Vec<String>,
        /// Second hand to compare against
        #[arg(long, num_args = 2..=7)]
        vs: Option<Vec<String>>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
