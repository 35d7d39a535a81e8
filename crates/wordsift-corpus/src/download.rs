use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use wordsift_config::CorpusFormat;
use wordsift_core::{CorpusError, CorpusSource};

use crate::load_file;

/// Corpus fetched over HTTP on first use and read from a local copy afterwards
#[derive(Debug, Clone)]
pub struct DownloadingCorpusSource {
    client: reqwest::Client,
    url: String,
    path: PathBuf,
    format: CorpusFormat,
}

impl DownloadingCorpusSource {
    pub fn new(url: String, path: PathBuf, format: CorpusFormat) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            path,
            format,
        }
    }

    async fn download(&self) -> Result<(), CorpusError> {
        tracing::info!("Downloading reference corpus from {}...", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CorpusError::Download(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CorpusError::Download(format!("HTTP {}", response.status())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CorpusError::Download(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Only a complete download ever appears under the final name
        let partial = self.path.with_extension("part");
        tokio::fs::write(&partial, &body).await?;
        tokio::fs::rename(&partial, &self.path).await?;

        tracing::info!("Saved {} bytes to {}", body.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl CorpusSource for DownloadingCorpusSource {
    async fn load(&self) -> Result<HashMap<String, u64>, CorpusError> {
        if !tokio::fs::try_exists(&self.path).await? {
            self.download().await?;
        }

        load_file(&self.path, self.format).await
    }

    fn describe(&self) -> String {
        format!("{} cached at {} ({})", self.url, self.path.display(), self.format)
    }
}
