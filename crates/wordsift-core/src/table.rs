use std::collections::HashMap;
use std::sync::Arc;

use crate::classifier::classify;
use crate::corpus::{ReferenceCorpusIndex, SharedCorpus};
use crate::enrich::MeaningEnricher;
use crate::error::BuildError;
use crate::example::select_example;
use crate::tokenizer::{split_sentences, tokenize};
use crate::types::{FrequencyTable, WordRow};

/// Words more common than this in the reference corpus are left out
pub const MAX_REFERENCE_FREQUENCY: u64 = 50;

/// Turns a passage into a ranked table of its uncommon words
pub struct FrequencyTableBuilder {
    corpus: Arc<SharedCorpus>,
    enricher: MeaningEnricher,
}

impl FrequencyTableBuilder {
    pub fn new(corpus: Arc<SharedCorpus>, enricher: MeaningEnricher) -> Self {
        Self { corpus, enricher }
    }

    /// Build the table for `text`, fetching meanings when `include_meaning`.
    ///
    /// Only an unavailable corpus fails the build; failed meaning lookups
    /// leave an empty meaning on their row.
    pub async fn build(
        &self,
        text: &str,
        include_meaning: bool,
    ) -> Result<FrequencyTable, BuildError> {
        let index = self.corpus.get().await?;

        let mut rows = tabulate(text, &index);

        if include_meaning {
            rows = self.enricher.enrich(rows).await;
        }

        rank(&mut rows);
        tracing::info!("Frequency table built with {} rows", rows.len());

        Ok(FrequencyTable::new(rows))
    }
}

/// Filtered rows in first-seen order, before enrichment and ranking
pub fn tabulate(text: &str, index: &ReferenceCorpusIndex) -> Vec<WordRow> {
    let counts = count_words(tokenize(text));
    let sentences = split_sentences(text);
    tracing::debug!(
        "Passage has {} distinct words in {} sentences",
        counts.len(),
        sentences.len()
    );

    let rows: Vec<WordRow> = counts
        .into_iter()
        .map(|(word, text_frequency)| {
            let reference_frequency = index.lookup(&word);
            WordRow {
                level: classify(reference_frequency),
                example: select_example(&word, &sentences),
                word,
                reference_frequency,
                text_frequency,
                meaning: None,
            }
        })
        .filter(|row| !is_numeric(&row.word))
        .filter(|row| row.reference_frequency <= MAX_REFERENCE_FREQUENCY)
        .collect();

    tracing::debug!("{} rows left after filtering", rows.len());
    rows
}

/// Occurrence count per distinct word, in order of first appearance
fn count_words(tokens: Vec<String>) -> Vec<(String, u32)> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u32)> = Vec::new();

    for token in tokens {
        match positions.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_numeric)
}

/// Stable sort, equal frequencies keep their first-seen order
fn rank(rows: &mut [WordRow]) {
    rows.sort_by(|a, b| b.reference_frequency.cmp(&a.reference_frequency));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_keep_first_seen_order() {
        let tokens = ["b", "a", "b", "c", "a", "b"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        assert_eq!(
            count_words(tokens),
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn very_long_token_gets_a_row_and_example() {
        let long = "a".repeat(150_000);
        let index = ReferenceCorpusIndex::from_counts([("see", 40u64)]);

        let rows = tabulate(&format!("See {long}. Done."), &index);

        let row = rows.iter().find(|row| row.word == long).unwrap();
        assert_eq!(row.text_frequency, 1);
        assert_eq!(row.example, format!("See 【{long}】."));
    }

    #[test]
    fn numeric_words_include_non_ascii_digits() {
        assert!(is_numeric("123"));
        assert!(is_numeric("١٢٣"));
        assert!(is_numeric("½"));
        assert!(!is_numeric("3d"));
        assert!(!is_numeric("n95"));
    }
}
