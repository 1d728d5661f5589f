//! Table settings resolved from defaults, an optional TOML file and the
//! environment. Command-line flags are applied on top by each command.
//!
//! ```toml
//! player1 = "Ann"
//! player2 = "Bob"
//! starting_stack = 200
//! seed = 42
//! small_blind = 1
//! big_blind = 2
//! ```

use serde::{Deserialize, Serialize};
use std::fs;

use holdem_engine::config::TableConfig;
use holdem_engine::rules::Blinds;

/// Path of the TOML file to read.
pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const SEED_ENV: &str = "HOLDEM_SEED";
pub const STACK_ENV: &str = "HOLDEM_STACK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub player_names: ValueSource,
    pub starting_stack: ValueSource,
    pub blinds: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            player_names: ValueSource::Default,
            starting_stack: ValueSource::Default,
            blinds: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: TableConfig,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = TableConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        // blank names and a zero stack keep their defaults
        if let Some(v) = f.player1
            && !v.trim().is_empty()
        {
            cfg.player_names[0] = v;
            sources.player_names = ValueSource::File;
        }
        if let Some(v) = f.player2
            && !v.trim().is_empty()
        {
            cfg.player_names[1] = v;
            sources.player_names = ValueSource::File;
        }
        match f.starting_stack {
            Some(0) => tracing::warn!("starting_stack = 0 in config file, using the default"),
            Some(v) => {
                cfg.starting_stack = v;
                sources.starting_stack = ValueSource::File;
            }
            None => {}
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        match (f.small_blind, f.big_blind) {
            (Some(small), Some(big)) => {
                cfg.blinds = Some(Blinds { small, big });
                sources.blinds = ValueSource::File;
            }
            (None, None) => {}
            _ => {
                return Err(ConfigError::Invalid(
                    "Invalid configuration: small_blind and big_blind must be set together".into(),
                ));
            }
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var(STACK_ENV)
        && !stack.is_empty()
    {
        match stack.trim().parse::<u32>() {
            Ok(v) if v > 0 => {
                cfg.starting_stack = v;
                sources.starting_stack = ValueSource::Env;
            }
            _ => tracing::warn!(value = %stack, "invalid {}, using the default stack", STACK_ENV),
        }
    }

    let cfg = cfg.with_setup_defaults();
    cfg.validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    player1: Option<String>,
    #[serde(default)]
    player2: Option<String>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
}
