use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// On-disk layout of a reference corpus
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// `word<TAB>count` per line
    #[default]
    Tsv,
    /// `{"word": count}` or `[["word", count], ...]`
    Json,
    /// Raw running text, counted word by word
    Text,
}

impl FromStr for CorpusFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(CorpusFormat::Tsv),
            "json" => Ok(CorpusFormat::Json),
            "text" | "txt" => Ok(CorpusFormat::Text),
            other => Err(format!("unknown corpus format '{other}'")),
        }
    }
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CorpusFormat::Tsv => "tsv",
            CorpusFormat::Json => "json",
            CorpusFormat::Text => "text",
        };
        f.write_str(name)
    }
}

fn default_cache_path() -> String {
    "data/reference_corpus.tsv".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Local corpus file, takes precedence over `cache_path`
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub format: CorpusFormat,
    /// Downloaded on first run when the local file is missing
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default = "default_cache_path")]
    pub cache_path: String,
}

impl CorpusConfig {
    /// File the corpus is read from (and downloaded to)
    pub fn local_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.cache_path)
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: CorpusFormat::default(),
            download_url: None,
            cache_path: default_cache_path(),
        }
    }
}
