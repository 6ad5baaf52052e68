//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals, in that order.
///
/// Every scan in this crate walks the lines in this order, which is what
/// makes tie-breaking deterministic.
#[rustfmt::skip]
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line fully occupied by one mark. X is
/// checked across every line before O.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| {
        LINES
            .iter()
            .any(|line| line.iter().all(|&cell| board.holds(cell, mark)))
    })
}
