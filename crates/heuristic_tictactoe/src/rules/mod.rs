//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board: who has
//! won, whether the board is full, and where the open threats are.
//! Nothing here mutates the board it is given.

pub mod draw;
pub mod threats;
pub mod win;

pub use draw::{is_draw, is_full};
pub use threats::{ForkMap, find_fork_opportunities, find_winning_move};
pub use win::{LINES, winner};
