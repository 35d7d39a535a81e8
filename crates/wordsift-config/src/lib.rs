use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::corpus::CorpusConfig;
use self::meaning::MeaningConfig;

pub mod corpus;
pub mod meaning;

pub use corpus::CorpusFormat;

fn default_build_timeout_seconds() -> u64 {
    120
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub meaning: MeaningConfig,

    /// Upper bound for a whole table build, meaning lookups included
    #[serde(default = "default_build_timeout_seconds")]
    pub build_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            meaning: MeaningConfig::default(),
            build_timeout_seconds: default_build_timeout_seconds(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON profile, missing fields take their defaults, then apply the environment
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.display().to_string()),
            _ => ConfigError::Io(e),
        })?;

        let mut config: Config = serde_json::from_reader(BufReader::new(file))?;
        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Override fields from `WORDSIFT_*` variables, unparsable values are ignored
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("WORDSIFT_CORPUS_PATH") {
            self.corpus.path = Some(path);
        }

        if let Some(format) = var("WORDSIFT_CORPUS_FORMAT") {
            match format.parse() {
                Ok(format) => self.corpus.format = format,
                Err(e) => tracing::warn!("Ignoring WORDSIFT_CORPUS_FORMAT: {}", e),
            }
        }

        if let Some(url) = var("WORDSIFT_CORPUS_URL") {
            self.corpus.download_url = Some(url);
        }

        if let Some(cache) = var("WORDSIFT_CORPUS_CACHE") {
            self.corpus.cache_path = cache;
        }

        if let Some(url) = var("WORDSIFT_MEANING_URL") {
            self.meaning.base_url = url;
        }

        self.meaning.concurrency = var("WORDSIFT_MEANING_CONCURRENCY")
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.meaning.concurrency);

        self.meaning.timeout_seconds = var("WORDSIFT_MEANING_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.meaning.timeout_seconds);

        self.build_timeout_seconds = var("WORDSIFT_BUILD_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.build_timeout_seconds);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
