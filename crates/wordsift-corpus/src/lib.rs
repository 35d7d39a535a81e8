use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use wordsift_config::CorpusFormat;
use wordsift_config::corpus::CorpusConfig;
use wordsift_core::{CorpusError, CorpusSource};

pub mod download;
pub mod json;
pub mod text;
pub mod tsv;

pub use download::DownloadingCorpusSource;

/// Corpus read from a local file
#[derive(Debug, Clone)]
pub struct FileCorpusSource {
    path: PathBuf,
    format: CorpusFormat,
}

impl FileCorpusSource {
    pub fn new(path: impl Into<PathBuf>, format: CorpusFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

#[async_trait]
impl CorpusSource for FileCorpusSource {
    async fn load(&self) -> Result<HashMap<String, u64>, CorpusError> {
        load_file(&self.path, self.format).await
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.path.display(), self.format)
    }
}

/// Read and parse a corpus file
pub async fn load_file(path: &Path, format: CorpusFormat) -> Result<HashMap<String, u64>, CorpusError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CorpusError::NotFound(path.display().to_string()),
        _ => CorpusError::Io(e),
    })?;

    parse(&content, format)
}

pub fn parse(content: &str, format: CorpusFormat) -> Result<HashMap<String, u64>, CorpusError> {
    match format {
        CorpusFormat::Tsv => Ok(tsv::parse(content)),
        CorpusFormat::Json => json::parse(content),
        CorpusFormat::Text => Ok(text::parse(content)),
    }
}

/// Corpus source described by the configuration
pub fn source_from_config(config: &CorpusConfig) -> Arc<dyn CorpusSource> {
    let path = PathBuf::from(config.local_path());

    match &config.download_url {
        Some(url) => Arc::new(DownloadingCorpusSource::new(url.clone(), path, config.format)),
        None => Arc::new(FileCorpusSource::new(path, config.format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("wordsift-corpus-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_each_format_from_disk() {
        let tsv = fixture("brown.tsv", "the\t69971\nfern\t4\n");
        let json = fixture("brown.json", r#"[["the", 69971], ["fern", 4]]"#);
        let text = fixture("brown.txt", "The fern. The end.");

        let from_tsv = FileCorpusSource::new(&tsv, CorpusFormat::Tsv).load().await.unwrap();
        let from_json = FileCorpusSource::new(&json, CorpusFormat::Json).load().await.unwrap();
        let from_text = FileCorpusSource::new(&text, CorpusFormat::Text).load().await.unwrap();

        assert_eq!(from_tsv, from_json);
        assert_eq!(from_text["the"], 2);
        assert_eq!(from_text["fern"], 1);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let source = FileCorpusSource::new("/nonexistent/brown.tsv", CorpusFormat::Tsv);
        assert!(matches!(source.load().await, Err(CorpusError::NotFound(_))));
    }

    #[test]
    fn config_picks_source_kind() {
        let mut config = CorpusConfig {
            path: Some("brown.tsv".to_string()),
            ..CorpusConfig::default()
        };
        assert_eq!(source_from_config(&config).describe(), "brown.tsv (tsv)");

        config.download_url = Some("https://example.org/brown.tsv".to_string());
        assert_eq!(
            source_from_config(&config).describe(),
            "https://example.org/brown.tsv cached at brown.tsv (tsv)"
        );
    }
}
