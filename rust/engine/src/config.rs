use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::STARTING_STACK;
use crate::rules::Blinds;

pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Everything needed to seat two players and start a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    pub player_names: [String; 2],
    pub starting_stack: u32,
    #[serde(default)]
    pub blinds: Option<Blinds>,
    /// Deck seed; `None` picks a random one.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_names: DEFAULT_PLAYER_NAMES.map(String::from),
            starting_stack: STARTING_STACK,
            blinds: None,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn new(name1: impl Into<String>, name2: impl Into<String>, starting_stack: u32) -> Self {
        Self {
            player_names: [name1.into(), name2.into()],
            starting_stack,
            ..Self::default()
        }
    }

    /// Builds a config from raw setup-form text. Blank names and a blank,
    /// non-numeric or zero stake fall back to the defaults instead of failing.
    ///
    /// ```
    /// use holdem_engine::config::TableConfig;
    ///
    /// let cfg = TableConfig::from_setup_fields("Ann", "  ", "abc");
    /// assert_eq!(cfg.player_names, ["Ann".to_string(), "Player 2".to_string()]);
    /// assert_eq!(cfg.starting_stack, 100);
    /// ```
    pub fn from_setup_fields(name1: &str, name2: &str, stake: &str) -> Self {
        Self {
            player_names: [name1.to_string(), name2.to_string()],
            starting_stack: stake.trim().parse::<u32>().unwrap_or(0),
            ..Self::default()
        }
        .with_setup_defaults()
    }

    /// Trims both names, then replaces a blank name or a zero stack with its
    /// default. Blinds and seed are left alone.
    ///
    /// ```
    /// use holdem_engine::config::TableConfig;
    ///
    /// let cfg = TableConfig::new("", " Bob ", 0).with_setup_defaults();
    /// assert_eq!(cfg.player_names, ["Player 1".to_string(), "Bob".to_string()]);
    /// assert_eq!(cfg.starting_stack, 100);
    /// ```
    pub fn with_setup_defaults(mut self) -> Self {
        for (name, default) in self.player_names.iter_mut().zip(DEFAULT_PLAYER_NAMES) {
            let trimmed = name.trim();
            *name = if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            };
        }
        if self.starting_stack == 0 {
            self.starting_stack = STARTING_STACK;
        }
        self
    }

    pub fn with_blinds(mut self, small: u32, big: u32) -> Self {
        self.blinds = Some(Blinds { small, big });
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_names.iter().any(|n| n.trim().is_empty()) {
            return Err(GameError::InvalidSetup("player names must not be empty".into()));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidSetup("starting stack must be > 0".into()));
        }
        if let Some(b) = self.blinds {
            if b.small > b.big {
                return Err(GameError::InvalidSetup(format!(
                    "small blind {} exceeds big blind {}",
                    b.small, b.big
                )));
            }
        }
        Ok(())
    }
}
