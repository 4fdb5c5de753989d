//! Command-line interface for the omok binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Omok engine driver: self-play, scenario demo and forbidden-move overlay
#[derive(Parser, Debug)]
#[command(name = "omok")]
#[command(about = "Renju-style Omok engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Fallback used when no tactical move exists
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// Single-ply heuristic
    Fast,
    /// Two-ply maximin
    Deep,
}

impl Strength {
    pub fn is_deep(self) -> bool {
        self == Strength::Deep
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the engine play itself and print the final board
    Selfplay {
        /// RNG seed; overrides the config file
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value = "deep")]
        black: Strength,

        #[arg(long, value_enum, default_value = "fast")]
        white: Strength,

        /// Stop after this many moves
        #[arg(long, default_value = "200")]
        max_moves: usize,

        /// Print the board after every move
        #[arg(long)]
        verbose: bool,
    },

    /// Run the tactical scenarios and report each decision
    Demo,

    /// Play a short opening and show cells forbidden to Black
    Overlay,
}
