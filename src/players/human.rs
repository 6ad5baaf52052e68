//! Human player that types moves on a terminal.

use super::Agent;
use anyhow::{Context, Result};
use heuristic_tictactoe::{Board, Mark, Position};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::{debug, warn};

/// Human player reading moves line by line.
///
/// Each prompt shows the board. Lines that are not a cell number (0-8)
/// or a position label ("center", "top left") are ignored and the
/// prompt repeats.
pub struct HumanAgent<R, W> {
    mark: Mark,
    input: R,
    output: W,
}

impl HumanAgent<StdinLock<'static>, Stdout> {
    /// Creates a human player on the process's stdin and stdout.
    pub fn stdio(mark: Mark) -> Self {
        Self::new(mark, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    /// Creates a new human player.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            input,
            output,
        }
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn propose_move(&mut self, board: &Board) -> Result<usize> {
        loop {
            write!(self.output, "\n{}", board)?;
            write!(self.output, "Your move, {} [0-8]: ", self.mark)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed");
            }

            match Position::from_label_or_number(&line) {
                Some(position) => return Ok(position.to_index()),
                None => debug!(input = line.trim(), "Ignoring unparseable move"),
            }
        }
    }

    fn notice(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            warn!(error = %e, "Failed to show notice to player");
        }
    }
}
