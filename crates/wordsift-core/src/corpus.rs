use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use unicode_normalization::UnicodeNormalization;

use crate::error::CorpusError;

/// Bulk provider of reference-corpus word counts
#[async_trait::async_trait]
pub trait CorpusSource: Send + Sync {
    /// Load all word counts, possibly slowly (download, parse)
    async fn load(&self) -> Result<HashMap<String, u64>, CorpusError>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}

/// Immutable word -> count index of the reference corpus
#[derive(Debug, Clone, Default)]
pub struct ReferenceCorpusIndex {
    counts: HashMap<String, u64>,
}

impl ReferenceCorpusIndex {
    /// Build the index, folding keys that normalize to the same word
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut folded: HashMap<String, u64> = HashMap::new();
        for (word, count) in counts {
            let total = folded.entry(normalize_key(word.as_ref())).or_insert(0);
            *total = total.saturating_add(count);
        }

        Self { counts: folded }
    }

    /// Reference count of a word, 0 when unknown
    pub fn lookup(&self, word: &str) -> u64 {
        self.counts
            .get(&normalize_key(word))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn normalize_key(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

/// Source backed by an in-memory map
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpusSource {
    counts: HashMap<String, u64>,
}

impl MemoryCorpusSource {
    pub fn new(counts: HashMap<String, u64>) -> Self {
        Self { counts }
    }

    pub fn from_pairs(pairs: &[(&str, u64)]) -> Self {
        Self {
            counts: pairs
                .iter()
                .map(|(word, count)| (word.to_string(), *count))
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl CorpusSource for MemoryCorpusSource {
    async fn load(&self) -> Result<HashMap<String, u64>, CorpusError> {
        Ok(self.counts.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory corpus ({} words)", self.counts.len())
    }
}

/// Lazily loaded reference index shared by every build of the process.
///
/// The first `get` loads the source; concurrent callers wait for that single
/// load. A failed load caches nothing so the next call retries.
pub struct SharedCorpus {
    source: Arc<dyn CorpusSource>,
    index: RwLock<Option<Arc<ReferenceCorpusIndex>>>,
}

impl SharedCorpus {
    pub fn new(source: Arc<dyn CorpusSource>) -> Self {
        Self {
            source,
            index: RwLock::new(None),
        }
    }

    /// Wrap an index that is already built
    pub fn preloaded(source: Arc<dyn CorpusSource>, index: ReferenceCorpusIndex) -> Self {
        Self {
            source,
            index: RwLock::new(Some(Arc::new(index))),
        }
    }

    pub async fn get(&self) -> Result<Arc<ReferenceCorpusIndex>, CorpusError> {
        if let Some(index) = self.index.read().await.as_ref() {
            return Ok(Arc::clone(index));
        }

        let mut slot = self.index.write().await;
        // Another caller may have finished loading while we waited
        if let Some(index) = slot.as_ref() {
            return Ok(Arc::clone(index));
        }

        tracing::info!("Loading reference corpus from {}...", self.source.describe());
        let counts = self.source.load().await?;
        if counts.is_empty() {
            return Err(CorpusError::Empty);
        }

        let index = Arc::new(ReferenceCorpusIndex::from_counts(counts));
        tracing::info!("Loaded {} reference corpus entries", index.len());

        *slot = Some(Arc::clone(&index));
        Ok(index)
    }

    pub async fn is_loaded(&self) -> bool {
        self.index.read().await.is_some()
    }

    /// Drop the cached index; the next `get` loads the source again
    pub async fn reset(&self) {
        if self.index.write().await.take().is_some() {
            tracing::info!("Reference corpus cache cleared");
        }
    }
}
