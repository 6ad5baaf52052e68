//! Heuristic Games library - tic-tac-toe matches between agents
//!
//! Wraps the pure game logic of [`heuristic_tictactoe`] in a playable
//! match driver.
//!
//! # Architecture
//!
//! - **Agents**: humans on a terminal, a random "monkey", and the
//!   Newell & Simon rule-based computer
//! - **Orchestrator**: turn loop, legality checks and the final report
//! - **Config**: TOML match settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use heuristic_games::{Orchestrator, RandomAgent, RuleBasedAgent, agent_rng};
//! use heuristic_tictactoe::Mark;
//!
//! # fn main() -> Result<(), heuristic_games::MatchError> {
//! let computer = RuleBasedAgent::new(Mark::X, agent_rng(Mark::X, Some(1)));
//! let monkey = RandomAgent::new(Mark::O, agent_rng(Mark::O, Some(1)));
//!
//! let outcome = Orchestrator::new(Box::new(monkey), Box::new(computer))?.run()?;
//! assert_ne!(outcome.winner, Some(Mark::O));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod error;
mod match_config;
mod orchestrator;
mod players;

pub use error::{ConfigError, IllegalMove, MatchError};
pub use match_config::MatchConfig;
pub use orchestrator::{
    DEFAULT_MAX_INVALID_MOVES, MatchOutcome, MoveRecord, Orchestrator, check_move,
};
pub use players::{
    Agent, AgentKind, HumanAgent, RandomAgent, RuleBasedAgent, agent_rng, build_agent,
};
