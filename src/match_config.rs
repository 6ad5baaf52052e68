//! Match configuration.

use crate::error::ConfigError;
use crate::orchestrator::DEFAULT_MAX_INVALID_MOVES;
use crate::players::AgentKind;
use derive_getters::Getters;
use derive_setters::Setters;
use heuristic_tictactoe::Mark;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a single match, loadable from TOML.
///
/// Every field is optional in the file; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for all randomness in the match. `None` draws from the OS.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Assign marks at random in agent-vs-agent matches.
    shuffle_marks: bool,

    /// Consecutive illegal proposals tolerated before aborting.
    max_invalid_moves: u32,

    /// Print the final board even when no human is playing.
    verbose: bool,

    /// Agent listed first (plays X unless marks are shuffled).
    x: AgentKind,

    /// Agent listed second.
    o: AgentKind,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_marks: true,
            max_invalid_moves: DEFAULT_MAX_INVALID_MOVES,
            verbose: false,
            x: AgentKind::Computer,
            o: AgentKind::Random,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_invalid_moves == 0 {
            return Err(ConfigError::new("max_invalid_moves must be at least 1"));
        }
        Ok(config)
    }

    /// Decides which agent kind plays which mark.
    ///
    /// Returns `(kind, mark)` pairs for the first and second agent. With
    /// `shuffle_marks` off the first agent plays X; otherwise a coin flip
    /// (seeded like the rest of the match) decides.
    #[instrument(skip(self), fields(x = %self.x, o = %self.o, shuffle = self.shuffle_marks))]
    pub fn assign_marks(&self) -> [(AgentKind, Mark); 2] {
        let first_is_x = if self.shuffle_marks {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            rng.random_bool(0.5)
        } else {
            true
        };

        let first_mark = if first_is_x { Mark::X } else { Mark::O };
        debug!(%first_mark, "Marks assigned");
        [(self.x, first_mark), (self.o, first_mark.opponent())]
    }
}
