//! Threat detection: immediate wins and "two" opportunities.

use super::win::LINES;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Returns the cell that completes a line for `mark`, if any.
///
/// A line qualifies when it holds exactly two `mark` squares and one
/// empty square. Only the first qualifying line (in [`LINES`] order) is
/// reported.
#[instrument(level = "trace", skip(board))]
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&cell| board.holds(cell, mark)).count();
        if owned != 2 {
            return None;
        }
        line.iter().copied().find(|&cell| board.is_empty(cell))
    })
}

/// Counts, per empty cell, how many "twos" playing there would create.
///
/// Every line with at least one `mark` square and exactly two empty
/// squares adds one to the count of both of its empty squares. A cell
/// with a count of two or more is a fork cell.
#[instrument(level = "trace", skip(board))]
pub fn find_fork_opportunities(board: &Board, mark: Mark) -> ForkMap {
    let mut forks = ForkMap::default();
    for line in &LINES {
        let squares = line.map(|cell| board.get(cell).unwrap_or(Square::Empty));
        let has_mark = squares.iter().any(|s| s.holds(mark));
        let empties = squares.iter().filter(|s| **s == Square::Empty).count();
        if has_mark && empties == 2 {
            for &cell in line {
                if board.is_empty(cell) {
                    forks.bump(cell);
                }
            }
        }
    }
    forks
}

/// Sparse cell -> count map that remembers insertion order.
///
/// Iteration follows the order in which each cell was first counted,
/// which is the order lines were scanned. Strategies that pick "the
/// first" candidate rely on this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkMap {
    entries: Vec<(usize, usize)>,
}

impl ForkMap {
    fn bump(&mut self, cell: usize) {
        match self.entries.iter_mut().find(|(c, _)| *c == cell) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((cell, 1)),
        }
    }

    /// Count recorded for `cell`, if any.
    pub fn get(&self, cell: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|(c, _)| *c == cell)
            .map(|(_, count)| *count)
    }

    /// Whether `cell` has a count at all.
    pub fn contains(&self, cell: usize) -> bool {
        self.get(cell).is_some()
    }

    /// `(cell, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Cells in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(cell, _)| *cell)
    }

    /// First cell whose count is at least two.
    pub fn first_fork(&self) -> Option<usize> {
        self.iter().find(|(_, count)| *count >= 2).map(|(cell, _)| cell)
    }

    /// Whether `cell` is a fork cell (count above one).
    pub fn is_fork(&self, cell: usize) -> bool {
        self.get(cell).is_some_and(|count| count > 1)
    }

    /// Number of distinct cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no line offers a two.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
