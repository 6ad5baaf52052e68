//! Game orchestration between agents.

use crate::error::{IllegalMove, MatchError};
use crate::players::Agent;
use heuristic_tictactoe::{Board, CELLS, Mark, Position, Square, winner};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default number of consecutive illegal proposals tolerated per turn.
pub const DEFAULT_MAX_INVALID_MOVES: u32 = 100;

/// Verifies that `cell` is on the board and not already taken.
#[instrument(level = "debug", skip(board))]
pub fn check_move(board: &Board, cell: usize) -> Result<(), IllegalMove> {
    if cell >= CELLS {
        return Err(IllegalMove::OutOfRange(cell));
    }
    if !board.is_empty(cell) {
        return Err(IllegalMove::Occupied(cell));
    }
    Ok(())
}

/// One move of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Mark that moved.
    pub mark: Mark,
    /// Cell it played (0-8).
    pub cell: usize,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.cell) {
            Some(pos) => write!(f, "{} -> {} ({})", self.mark, self.cell, pos),
            None => write!(f, "{} -> {}", self.mark, self.cell),
        }
    }
}

/// Result of a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Winning mark, `None` for a draw.
    pub winner: Option<Mark>,
    /// Final board.
    pub board: Board,
    /// Moves in the order they were played.
    pub history: Vec<MoveRecord>,
    /// Name of the agent that played X.
    pub player_x: String,
    /// Name of the agent that played O.
    pub player_o: String,
}

impl MatchOutcome {
    /// True when nobody won.
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Closing message shown to people watching the match.
    pub fn summary(&self) -> String {
        let verdict = match self.winner {
            Some(mark) => format!("Congratulations, player {}!!", mark),
            None => "It is a draw.".to_string(),
        };
        format!("\n{}\nAlas, our game is at an end!\n{}\n", self.board, verdict)
    }
}

/// Runs a match between two agents.
///
/// Agents are ordered so that X always moves first; whose turn it is
/// follows from the number of marks on the board.
pub struct Orchestrator {
    board: Board,
    agents: [Box<dyn Agent>; 2],
    history: Vec<MoveRecord>,
    max_invalid_moves: u32,
}

impl Orchestrator {
    /// Creates a new orchestrator with an empty board.
    #[instrument(skip_all, fields(first = %first.mark(), second = %second.mark()))]
    pub fn new(first: Box<dyn Agent>, second: Box<dyn Agent>) -> Result<Self, MatchError> {
        if first.mark() == second.mark() {
            return Err(MatchError::DuplicateMark(first.mark()));
        }
        let agents = if first.mark() == Mark::X {
            [first, second]
        } else {
            [second, first]
        };
        Ok(Self {
            board: Board::new(),
            agents,
            history: Vec::new(),
            max_invalid_moves: DEFAULT_MAX_INVALID_MOVES,
        })
    }

    /// Starts from a position other than the empty board.
    ///
    /// X moves first, so the board must hold as many X marks as O marks
    /// or exactly one more.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn with_board(mut self, board: Board) -> Result<Self, MatchError> {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        if x != o && x != o + 1 {
            warn!(x, o, "Rejected starting board");
            return Err(MatchError::InvalidBoard { x, o });
        }
        self.board = board;
        Ok(self)
    }

    /// Sets how many illegal proposals in a row abort the match.
    pub fn with_max_invalid_moves(mut self, max_invalid_moves: u32) -> Self {
        self.max_invalid_moves = max_invalid_moves;
        self
    }

    /// Plays until someone wins or the board is full.
    #[instrument(skip(self), fields(x = self.agents[0].name(), o = self.agents[1].name()))]
    pub fn run(mut self) -> Result<MatchOutcome, MatchError> {
        info!("Starting match");
        let mut result = winner(&self.board);

        while self.board.moves_made() < CELLS && result.is_none() {
            let turn = self.board.moves_made() % 2;
            let cell = self.request_legal_move(turn)?;
            let mark = self.agents[turn].mark();

            self.board.set(cell, Square::Occupied(mark))?;
            self.history.push(MoveRecord { mark, cell });
            debug!(%mark, cell, board = %self.board.compact(), "Move played");

            result = winner(&self.board);
        }

        match result {
            Some(mark) => info!(%mark, moves = self.history.len(), "Match won"),
            None => info!(moves = self.history.len(), "Match drawn"),
        }

        let [x, o] = &self.agents;
        Ok(MatchOutcome {
            winner: result,
            board: self.board,
            player_x: x.name().to_string(),
            player_o: o.name().to_string(),
            history: self.history,
        })
    }

    /// Asks the agent whose turn it is until it proposes a legal cell.
    fn request_legal_move(&mut self, turn: usize) -> Result<usize, MatchError> {
        let agent = &mut self.agents[turn];
        let mut attempts = 0;
        loop {
            let cell = agent
                .propose_move(&self.board)
                .map_err(|e| MatchError::Agent {
                    mark: agent.mark(),
                    message: format!("{:#}", e),
                })?;

            match check_move(&self.board, cell) {
                Ok(()) => return Ok(cell),
                Err(illegal) => {
                    attempts += 1;
                    warn!(mark = %agent.mark(), cell, %illegal, attempts, "Rejected move");
                    agent.notice(&illegal.to_string());
                    if attempts >= self.max_invalid_moves {
                        return Err(MatchError::TooManyInvalidMoves {
                            mark: agent.mark(),
                            attempts,
                        });
                    }
                }
            }
        }
    }
}
