use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use wordsift_meaning::{MeaningLookup, NoMeaning};

use crate::types::WordRow;

/// Optional stage attaching a meaning to every row.
///
/// Lookups run with bounded parallelism but results are placed by row, so
/// the output order always equals the input order.
#[derive(Clone)]
pub struct MeaningEnricher {
    lookup: Arc<dyn MeaningLookup>,
    concurrency: usize,
}

impl MeaningEnricher {
    pub fn new(lookup: Arc<dyn MeaningLookup>, concurrency: usize) -> Self {
        Self {
            lookup,
            concurrency: concurrency.max(1),
        }
    }

    /// Enricher whose meanings are always empty
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoMeaning), 1)
    }

    pub async fn enrich(&self, rows: Vec<WordRow>) -> Vec<WordRow> {
        let provider = self.lookup.metadata().name;
        tracing::debug!(
            "Looking up {} meanings via {} (concurrency {})",
            rows.len(),
            provider,
            self.concurrency
        );

        stream::iter(rows)
            .map(|row| self.attach_meaning(row))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn attach_meaning(&self, mut row: WordRow) -> WordRow {
        let meaning = match self.lookup.lookup(&row.word).await {
            Ok(meaning) => meaning,
            Err(e) => {
                tracing::warn!("Meaning lookup failed for '{}': {}", row.word, e);
                String::new()
            }
        };

        row.meaning = Some(meaning);
        row
    }
}

impl Default for MeaningEnricher {
    fn default() -> Self {
        Self::disabled()
    }
}
