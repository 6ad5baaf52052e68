//! Newell & Simon rule-based move selection.
//!
//! The strategist walks a fixed priority list and plays the first rule
//! that yields a cell:
//!
//! 1. win now
//! 2. block the opponent's win
//! 3. create a fork
//! 4. extend a two, unless the forced reply hands the opponent a fork
//! 5. block the opponent's fork
//! 6. take the center
//! 7. take the corner opposite an opponent corner
//! 8. take any corner
//! 9. take any side
//! 10. random empty cell
//!
//! This is not optimal play. Rule 4 only looks one ply ahead and the
//! fork-blocking rule plays into the fork cell rather than forcing a
//! reply, so it passes up wins a full search would find.

use crate::rules::{ForkMap, find_fork_opportunities, find_winning_move};
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Corners in the order they are tried.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Sides in the order they are tried.
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

/// The center cell.
pub const CENTER: usize = 4;

/// Which rule of the priority list produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Rule {
    /// Completes a line for the mover.
    Win,
    /// Blocks a line the opponent would complete.
    Block,
    /// Creates two threats at once.
    Fork,
    /// Creates a single threat whose forced reply is safe.
    SafeExtension,
    /// Occupies the opponent's fork cell.
    BlockFork,
    /// Takes the center.
    Center,
    /// Mirrors an opponent corner.
    OppositeCorner,
    /// Takes a free corner.
    EmptyCorner,
    /// Takes a free side.
    EmptySide,
    /// Random empty cell.
    Fallback,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell index (0-8) to play.
    pub cell: usize,
    /// Rule that fired.
    pub rule: Rule,
}

impl Decision {
    fn new(cell: usize, rule: Rule) -> Self {
        Self { cell, rule }
    }
}

/// Picks a cell for `me` following the priority list.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng), fields(board = %board.compact()))]
pub fn decide<R: Rng + ?Sized>(board: &Board, me: Mark, rng: &mut R) -> Option<Decision> {
    let decision = rule_based(board, me).or_else(|| {
        random_move(board, rng).map(|cell| Decision::new(cell, Rule::Fallback))
    });
    if let Some(d) = decision {
        debug!(cell = d.cell, rule = %d.rule, "Strategist chose move");
    }
    decision
}

/// Picks a cell for `me`, discarding the rule that chose it.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, me: Mark, rng: &mut R) -> Option<usize> {
    decide(board, me, rng).map(|d| d.cell)
}

/// Uniformly random empty cell ("monkey" play).
#[instrument(level = "trace", skip(board, rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}

/// Rules 1-9. Deterministic.
fn rule_based(board: &Board, me: Mark) -> Option<Decision> {
    let other = me.opponent();

    if let Some(cell) = find_winning_move(board, me) {
        return Some(Decision::new(cell, Rule::Win));
    }

    if let Some(cell) = find_winning_move(board, other) {
        return Some(Decision::new(cell, Rule::Block));
    }

    let my_twos = find_fork_opportunities(board, me);
    if let Some(cell) = my_twos.first_fork() {
        return Some(Decision::new(cell, Rule::Fork));
    }

    if let Some(cell) = safe_extension(board, me, &my_twos) {
        return Some(Decision::new(cell, Rule::SafeExtension));
    }

    if let Some(cell) = find_fork_opportunities(board, other).first_fork() {
        return Some(Decision::new(cell, Rule::BlockFork));
    }

    if board.is_empty(CENTER) {
        return Some(Decision::new(CENTER, Rule::Center));
    }

    if let Some(corner) = CORNERS
        .iter()
        .copied()
        .find(|&c| board.holds(c, other) && board.is_empty(8 - c))
    {
        return Some(Decision::new(8 - corner, Rule::OppositeCorner));
    }

    if let Some(corner) = CORNERS.iter().copied().find(|&c| board.is_empty(c)) {
        return Some(Decision::new(corner, Rule::EmptyCorner));
    }

    SIDES
        .iter()
        .copied()
        .find(|&c| board.is_empty(c))
        .map(|side| Decision::new(side, Rule::EmptySide))
}

/// Rule 4: the first two-creating cell whose forced reply is not a fork
/// cell for the opponent.
fn safe_extension(board: &Board, me: Mark, candidates: &ForkMap) -> Option<usize> {
    let other = me.opponent();
    candidates.cells().find(|&cell| {
        let hypo = board.with_move(cell, me);
        let reply = find_winning_move(&hypo, me);
        let their_twos = find_fork_opportunities(&hypo, other);
        let unsafe_reply = reply.is_some_and(|w| their_twos.is_fork(w));
        trace!(cell, ?reply, unsafe_reply, "Considered extension");
        !unsafe_reply
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn decide_for(marks: [Option<Mark>; 9], me: Mark) -> Decision {
        decide(&Board::from_marks(marks), me, &mut rng()).unwrap()
    }

    #[test]
    fn test_completes_top_row() {
        let d = decide_for([X, X, E, O, O, E, E, E, E], Mark::X);
        assert_eq!(d, Decision::new(2, Rule::Win));
    }

    #[test]
    fn test_win_beats_block() {
        // O can win at 5 while X threatens 2.
        let d = decide_for([X, X, E, O, O, E, X, E, E], Mark::O);
        assert_eq!(d, Decision::new(5, Rule::Win));
    }

    #[test]
    fn test_blocks_opponent_win() {
        let d = decide_for([X, X, E, E, O, E, E, E, E], Mark::O);
        assert_eq!(d, Decision::new(2, Rule::Block));
    }

    #[test]
    fn test_creates_fork() {
        // Column 2 and the anti-diagonal both reach cell 2.
        let d = decide_for([E, E, E, O, E, E, X, O, X], Mark::X);
        assert_eq!(d, Decision::new(2, Rule::Fork));
    }

    #[test]
    fn test_safe_extension_takes_first_two() {
        let d = decide_for([X, E, E, E, O, E, E, E, E], Mark::X);
        assert_eq!(d, Decision::new(1, Rule::SafeExtension));
    }

    #[test]
    fn test_safe_extension_skips_unsafe_cell() {
        // O's first candidate is 0, which forces X to 8: a fork for X
        // along row 2 and column 2.
        let board = Board::from_marks([E, E, E, E, O, X, E, X, E]);
        let hypo = board.with_move(0, Mark::O);
        assert_eq!(find_winning_move(&hypo, Mark::O), Some(8));
        assert!(find_fork_opportunities(&hypo, Mark::X).is_fork(8));

        let d = decide(&board, Mark::O, &mut rng()).unwrap();
        assert_eq!(d, Decision::new(8, Rule::SafeExtension));
    }

    #[test]
    fn test_blocks_opponent_fork() {
        // O's only mark sits on contested lines, so O has no twos. X
        // would fork at 6 (row 2 and column 0).
        let d = decide_for([E, E, E, X, E, O, E, E, X], Mark::O);
        assert_eq!(d, Decision::new(6, Rule::BlockFork));
    }

    #[test]
    fn test_takes_center() {
        let d = decide_for([E; 9], Mark::X);
        assert_eq!(d, Decision::new(4, Rule::Center));
        let d = decide_for([E, E, E, E, E, E, E, E, X], Mark::O);
        assert_eq!(d, Decision::new(4, Rule::Center));
    }

    #[test]
    fn test_opposite_corner() {
        let d = decide_for([O, X, X, X, O, O, E, E, X], Mark::O);
        assert_eq!(d, Decision::new(6, Rule::OppositeCorner));
    }

    #[test]
    fn test_empty_corner() {
        let d = decide_for([E, E, E, E, X, E, E, E, E], Mark::O);
        assert_eq!(d, Decision::new(0, Rule::EmptyCorner));
    }

    #[test]
    fn test_empty_side() {
        let d = decide_for([O, E, X, X, X, O, O, E, X], Mark::O);
        assert_eq!(d, Decision::new(1, Rule::EmptySide));
    }

    #[test]
    fn test_rule_based_is_deterministic() {
        let board = Board::from_marks([X, E, E, E, O, E, E, E, E]);
        let first = choose_move(&board, Mark::X, &mut rng());
        let second = choose_move(&board, Mark::X, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(decide(&board, Mark::O, &mut rng()), None);
        assert_eq!(random_move(&board, &mut rng()), None);
    }

    #[test]
    fn test_random_move_is_empty_cell() {
        let board = Board::from_marks([X, O, X, X, O, E, O, X, E]);
        let mut rng = rng();
        for _ in 0..50 {
            let cell = random_move(&board, &mut rng).unwrap();
            assert!(cell == 5 || cell == 8);
        }
    }
}
