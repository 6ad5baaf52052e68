//! Heuristic tic-tac-toe - pure game logic
//!
//! This crate holds everything that can be decided from a board alone:
//!
//! - **Types**: [`Board`], [`Mark`], [`Square`] and named [`Position`]s
//! - **Rules**: win and draw detection over the fixed [`LINES`] table
//! - **Threats**: immediate wins and "two" counts used for fork play
//! - **Strategy**: the Newell & Simon priority list and a random policy
//!
//! # Example
//!
//! ```
//! use heuristic_tictactoe::{Board, Mark, strategy};
//! use rand::SeedableRng;
//!
//! let board = Board::new().with_move(0, Mark::X).with_move(1, Mark::X)
//!     .with_move(3, Mark::O).with_move(4, Mark::O);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! assert_eq!(strategy::choose_move(&board, Mark::X, &mut rng), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
pub mod rules;
pub mod strategy;
mod types;

pub use position::Position;
pub use rules::{
    ForkMap, LINES, find_fork_opportunities, find_winning_move, is_draw, is_full, winner,
};
pub use strategy::{Decision, Rule, choose_move, decide, random_move};
pub use types::{Board, BoardError, CELLS, Mark, Square};
