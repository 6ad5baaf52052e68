//! Command-line interface for heuristic_games.

use crate::match_config::MatchConfig;
use crate::players::AgentKind;
use clap::{Parser, Subcommand};
use heuristic_tictactoe::Mark;
use std::path::PathBuf;

/// Heuristic Games - tic-tac-toe against a Newell & Simon rule-based player
#[derive(Parser, Debug)]
#[command(name = "heuristic_games")]
#[command(about = "Play or watch rule-based tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match config; flags override its values
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer or the monkey on stdin/stdout
    Play {
        /// Mark you want to play (X moves first)
        #[arg(short, long, default_value = "X", value_parser = parse_mark)]
        mark: Mark,

        /// Who you play against
        #[arg(long, value_enum, default_value_t = AgentKind::Computer)]
        opponent: AgentKind,

        /// Seed for the opponent's randomness
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Watch two agents play each other
    Watch {
        /// First agent (plays X unless marks are shuffled)
        #[arg(long, value_enum)]
        x: Option<AgentKind>,

        /// Second agent
        #[arg(long, value_enum)]
        o: Option<AgentKind>,

        /// Seed for all randomness in the match
        #[arg(long)]
        seed: Option<u64>,

        /// Keep the listed mark order instead of assigning marks at random
        #[arg(long)]
        no_shuffle: bool,

        /// Print the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    s.parse::<Mark>()
        .map_err(|_| format!("expected X or O, got '{}'", s))
}

impl Command {
    /// Applies command-line overrides on top of `base`.
    pub fn apply_to(&self, base: MatchConfig) -> MatchConfig {
        match self {
            Command::Play { seed, .. } => match seed {
                Some(seed) => base.with_seed(*seed),
                None => base,
            },
            Command::Watch {
                x,
                o,
                seed,
                no_shuffle,
                ..
            } => {
                let mut config = base;
                if let Some(x) = x {
                    config = config.with_x(*x);
                }
                if let Some(o) = o {
                    config = config.with_o(*o);
                }
                if let Some(seed) = seed {
                    config = config.with_seed(*seed);
                }
                if *no_shuffle {
                    config = config.with_shuffle_marks(false);
                }
                config
            }
        }
    }
}
