//! Layered configuration: defaults, then a TOML file, then environment.
//!
//! - `DRAWPOKER_CONFIG` names a TOML file with any of the [`Config`] fields
//! - `DRAWPOKER_SEED`, `DRAWPOKER_CREDITS`, `DRAWPOKER_BET`, `DRAWPOKER_POLICY`
//!   override single values
//!
//! Command-line flags, applied by each command, take precedence over both.

use drawpoker_ai::POLICY_NAMES;
use drawpoker_engine::session::{DEFAULT_CREDITS, MAX_BET, MIN_BET};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_credits: u32,
    pub bet: u32,
    pub seed: Option<u64>,
    pub policy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_credits: ValueSource,
    pub bet: ValueSource,
    pub seed: ValueSource,
    pub policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_credits: ValueSource::Default,
            bet: ValueSource::Default,
            seed: ValueSource::Default,
            policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_credits: DEFAULT_CREDITS,
            bet: MIN_BET,
            seed: None,
            policy: "baseline".into(),
        }
    }
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("DRAWPOKER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_credits {
            cfg.starting_credits = v;
            sources.starting_credits = ValueSource::File;
        }
        if let Some(v) = f.bet {
            cfg.bet = v;
            sources.bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("DRAWPOKER_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(credits) = std::env::var("DRAWPOKER_CREDITS")
        && !credits.is_empty()
    {
        cfg.starting_credits = credits
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid credits".into()))?;
        sources.starting_credits = ValueSource::Env;
    }
    if let Ok(bet) = std::env::var("DRAWPOKER_BET")
        && !bet.is_empty()
    {
        cfg.bet = bet
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet".into()))?;
        sources.bet = ValueSource::Env;
    }
    if let Ok(policy) = std::env::var("DRAWPOKER_POLICY")
        && !policy.is_empty()
    {
        cfg.policy = policy;
        sources.policy = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_credits: Option<u32>,
    #[serde(default)]
    bet: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    policy: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_credits == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_credits must be >0".into(),
        ));
    }
    if !(MIN_BET..=MAX_BET).contains(&cfg.bet) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: bet must be within {}..={}",
            MIN_BET, MAX_BET
        )));
    }
    if !POLICY_NAMES.contains(&cfg.policy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown policy {}",
            cfg.policy
        )));
    }
    Ok(())
}
