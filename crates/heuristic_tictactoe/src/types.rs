//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns true if the square holds `mark`.
    pub fn holds(self, mark: Mark) -> bool {
        self == Square::Occupied(mark)
    }
}

/// Index passed to [`Board::set`] was outside 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell {} is out of bounds (must be 0-8)", index)]
pub struct BoardError {
    /// Offending index.
    pub index: usize,
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: lookahead works on copies, never on the
/// board owned by the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Builds a board from optional marks, `None` meaning empty.
    pub fn from_marks(marks: [Option<Mark>; CELLS]) -> Self {
        Self::from_squares(marks.map(|m| m.map_or(Square::Empty, Square::Occupied)))
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(BoardError { index })?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if a square holds `mark`.
    pub fn holds(&self, index: usize, mark: Mark) -> bool {
        matches!(self.get(index), Some(s) if s.holds(mark))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares.iter().filter(|s| s.holds(mark)).count()
    }

    /// Number of occupied squares.
    pub fn moves_made(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// One-line rendering for logs, e.g. `X...O....`.
    pub fn compact(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            })
            .collect()
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    ///
    /// The receiver is left untouched. Out-of-range indices return an
    /// unchanged copy.
    pub fn with_move(&self, index: usize, mark: Mark) -> Self {
        let mut copy = *self;
        if let Some(slot) = copy.squares.get_mut(index) {
            *slot = Square::Occupied(mark);
        }
        copy
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, squares) in self.squares.chunks(3).enumerate() {
            let offset = row * 3;
            let cells: Vec<String> = squares
                .iter()
                .enumerate()
                .map(|(col, square)| match square {
                    Square::Empty => (offset + col).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
