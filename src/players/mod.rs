//! Agent trait and implementations.

mod human;
mod random;
mod rule_based;

pub use human::HumanAgent;
pub use random::RandomAgent;
pub use rule_based::RuleBasedAgent;

use anyhow::Result;
use heuristic_tictactoe::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Something that can propose moves for one mark.
pub trait Agent {
    /// The mark this agent plays.
    fn mark(&self) -> Mark;

    /// Display name.
    fn name(&self) -> &str;

    /// Proposes a cell (0-8) for the next move.
    ///
    /// The driver validates the proposal and asks again if it is
    /// illegal, so implementations need not check the board themselves.
    fn propose_move(&mut self, board: &Board) -> Result<usize>;

    /// Tells the agent why its last proposal was refused.
    fn notice(&mut self, _message: &str) {}
}

/// Kind of agent, as named in config files and on the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AgentKind {
    /// Reads moves from standard input.
    Human,
    /// Plays uniformly at random ("monkey").
    #[serde(alias = "monkey")]
    #[value(alias = "monkey")]
    #[strum(to_string = "random", serialize = "monkey")]
    Random,
    /// Follows the Newell & Simon priority list.
    Computer,
}

/// Seeds an agent's RNG: from `seed` mixed with the mark when given,
/// otherwise from OS entropy.
pub fn agent_rng(mark: Mark, seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(match mark {
            Mark::X => seed,
            Mark::O => seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15,
        }),
        None => StdRng::from_os_rng(),
    }
}

/// Builds an agent of the given kind bound to `mark`.
///
/// Human agents read from stdin and write to stdout.
#[instrument]
pub fn build_agent(kind: AgentKind, mark: Mark, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        AgentKind::Human => Box::new(HumanAgent::stdio(mark)),
        AgentKind::Random => Box::new(RandomAgent::new(mark, agent_rng(mark, seed))),
        AgentKind::Computer => Box::new(RuleBasedAgent::new(mark, agent_rng(mark, seed))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_agent_kind_parses_monkey_alias() {
        assert_eq!("monkey".parse::<AgentKind>().unwrap(), AgentKind::Random);
        assert_eq!("computer".parse::<AgentKind>().unwrap(), AgentKind::Computer);
        assert_eq!(AgentKind::Random.to_string(), "random");
    }

    #[test]
    fn test_seeded_rngs_differ_per_mark() {
        let x: u64 = agent_rng(Mark::X, Some(5)).random();
        let x_again: u64 = agent_rng(Mark::X, Some(5)).random();
        let o: u64 = agent_rng(Mark::O, Some(5)).random();
        assert_eq!(x, x_again);
        assert_ne!(x, o);
    }

    #[test]
    fn test_build_agent_binds_mark() {
        let agent = build_agent(AgentKind::Computer, Mark::O, Some(1));
        assert_eq!(agent.mark(), Mark::O);
        assert_eq!(agent.name(), "Computer");
        let agent = build_agent(AgentKind::Random, Mark::X, Some(1));
        assert_eq!(agent.name(), "Monkey");
    }
}
