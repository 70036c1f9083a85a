//! Layered configuration: defaults, then a TOML file named by
//! `CARDROOM_CONFIG`, then `CARDROOM_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use cardroom_engine::engine::{DEFAULT_SEED_LENGTH, Rules};
use cardroom_engine::rng::ShuffleAlgorithm;
use tracing_subscriber::EnvFilter;
use url::Url;

pub const CONFIG_ENV: &str = "CARDROOM_CONFIG";
pub const BASE_URL_ENV: &str = "CARDROOM_BASE_URL";
pub const STATE_DIR_ENV: &str = "CARDROOM_STATE_DIR";
pub const ALGORITHM_ENV: &str = "CARDROOM_ALGORITHM";
pub const SEED_LENGTH_ENV: &str = "CARDROOM_SEED_LENGTH";
pub const SHARE_COMMAND_ENV: &str = "CARDROOM_SHARE_COMMAND";
pub const LOG_LEVEL_ENV: &str = "CARDROOM_LOG_LEVEL";

const MAX_SEED_LENGTH: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Page that share links point at.
    pub base_url: String,
    /// Directory holding the persisted game state.
    pub state_dir: PathBuf,
    pub algorithm: ShuffleAlgorithm,
    pub seed_length: usize,
    /// Program (and arguments) that receives invitation text on stdin.
    pub share_command: Vec<String>,
    /// Default tracing filter when `CARDROOM_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".into(),
            state_dir: PathBuf::from(".cardroom"),
            algorithm: ShuffleAlgorithm::Arc4,
            seed_length: DEFAULT_SEED_LENGTH,
            share_command: Vec::new(),
            log_level: "warn".into(),
        }
    }
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            algorithm: self.algorithm,
            seed_length: self.seed_length,
        }
    }

    /// Parsed `base_url`; validated by [`load_with_sources`].
    pub fn base(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("base_url {:?}: {}", self.base_url, e)))
    }
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
    pub base_url: ValueSource,
    pub state_dir: ValueSource,
    pub algorithm: ValueSource,
    pub seed_length: ValueSource,
    pub share_command: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            base_url: ValueSource::Default,
            state_dir: ValueSource::Default,
            algorithm: ValueSource::Default,
            seed_length: ValueSource::Default,
            share_command: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.base_url {
            cfg.base_url = v;
            sources.base_url = ValueSource::File;
        }
        if let Some(v) = f.state_dir {
            cfg.state_dir = v;
            sources.state_dir = ValueSource::File;
        }
        if let Some(v) = f.algorithm {
            cfg.algorithm = parse_algorithm(&v)?;
            sources.algorithm = ValueSource::File;
        }
        if let Some(v) = f.seed_length {
            cfg.seed_length = v;
            sources.seed_length = ValueSource::File;
        }
        if let Some(v) = f.share_command {
            cfg.share_command = v;
            sources.share_command = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Some(v) = env_value(BASE_URL_ENV) {
        cfg.base_url = v;
        sources.base_url = ValueSource::Env;
    }
    if let Some(v) = env_value(STATE_DIR_ENV) {
        cfg.state_dir = PathBuf::from(v);
        sources.state_dir = ValueSource::Env;
    }
    if let Some(v) = env_value(ALGORITHM_ENV) {
        cfg.algorithm = parse_algorithm(&v)?;
        sources.algorithm = ValueSource::Env;
    }
    if let Some(v) = env_value(SEED_LENGTH_ENV) {
        cfg.seed_length = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid seed_length".into()))?;
        sources.seed_length = ValueSource::Env;
    }
    if let Some(v) = env_value(SHARE_COMMAND_ENV) {
        cfg.share_command = v.split_whitespace().map(str::to_string).collect();
        sources.share_command = ValueSource::Env;
    }
    if let Some(v) = env_value(LOG_LEVEL_ENV) {
        cfg.log_level = v;
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_algorithm(s: &str) -> Result<ShuffleAlgorithm, ConfigError> {
    s.parse()
        .map_err(|e| ConfigError::Invalid(format!("Invalid algorithm: {}", e)))
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    state_dir: Option<PathBuf>,
    #[serde(default)]
    algorithm: Option<String>,
    #[serde(default)]
    seed_length: Option<usize>,
    #[serde(default)]
    share_command: Option<Vec<String>>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    let base = cfg.base()?;
    if base.cannot_be_a_base() {
        return Err(ConfigError::Invalid(format!(
            "base_url {:?} cannot carry a query",
            cfg.base_url
        )));
    }
    if cfg.seed_length == 0 || cfg.seed_length > MAX_SEED_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "seed_length must be within 1..={}",
            MAX_SEED_LENGTH
        )));
    }
    if EnvFilter::try_new(&cfg.log_level).is_err() {
        return Err(ConfigError::Invalid(format!(
            "Invalid log_level {:?}",
            cfg.log_level
        )));
    }
    Ok(())
}
