//! Random "monkey" agent.

use super::Agent;
use anyhow::Result;
use heuristic_tictactoe::{Board, Mark, strategy};
use rand::rngs::StdRng;
use tracing::debug;

/// Agent that picks a uniformly random empty square.
pub struct RandomAgent {
    mark: Mark,
    rng: StdRng,
}

impl RandomAgent {
    /// Creates a new random agent.
    pub fn new(mark: Mark, rng: StdRng) -> Self {
        Self { mark, rng }
    }
}

impl Agent for RandomAgent {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Monkey"
    }

    fn propose_move(&mut self, board: &Board) -> Result<usize> {
        let cell = strategy::random_move(board, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(mark = %self.mark, cell, "Monkey chose position");
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_only_picks_empty_squares() {
        let mut agent = RandomAgent::new(Mark::O, StdRng::seed_from_u64(3));
        let mut board = Board::new();
        for cell in [0, 1, 2, 3, 5, 6, 7] {
            board = board.with_move(cell, Mark::X);
        }
        for _ in 0..20 {
            let cell = agent.propose_move(&board).unwrap();
            assert!(cell == 4 || cell == 8);
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut agent = RandomAgent::new(Mark::O, StdRng::seed_from_u64(3));
        let mut board = Board::new();
        for cell in 0..9 {
            board = board.with_move(cell, Mark::X);
        }
        assert!(agent.propose_move(&board).is_err());
    }
}
