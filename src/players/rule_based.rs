//! Rule-based "computer" agent.

use super::Agent;
use anyhow::Result;
use heuristic_tictactoe::{Board, Mark, strategy};
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Agent that follows the Newell & Simon priority list.
///
/// The RNG is only consulted by the last-resort random rule.
pub struct RuleBasedAgent {
    mark: Mark,
    rng: StdRng,
}

impl RuleBasedAgent {
    /// Creates a new rule-based agent.
    pub fn new(mark: Mark, rng: StdRng) -> Self {
        Self { mark, rng }
    }
}

impl Agent for RuleBasedAgent {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Computer"
    }

    #[instrument(skip(self, board), fields(mark = %self.mark))]
    fn propose_move(&mut self, board: &Board) -> Result<usize> {
        let decision = strategy::decide(board, self.mark, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(cell = decision.cell, rule = %decision.rule, "Computer chose position");
        Ok(decision.cell)
    }
}
