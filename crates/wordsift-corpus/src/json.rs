use std::collections::HashMap;

use serde::Deserialize;
use wordsift_core::CorpusError;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCorpus {
    Map(HashMap<String, u64>),
    Pairs(Vec<(String, u64)>),
}

/// Parse `{"word": count}` or `[["word", count], ...]`
pub fn parse(content: &str) -> Result<HashMap<String, u64>, CorpusError> {
    let corpus: JsonCorpus = serde_json::from_str(content).map_err(|_| {
        CorpusError::InvalidFormat(
            "expected an object of counts or an array of [word, count] pairs".to_string(),
        )
    })?;

    let counts = match corpus {
        JsonCorpus::Map(map) => map,
        JsonCorpus::Pairs(pairs) => {
            let mut counts = HashMap::with_capacity(pairs.len());
            for (word, count) in pairs {
                let total = counts.entry(word).or_insert(0u64);
                *total = total.saturating_add(count);
            }
            counts
        }
    };

    Ok(counts)
}
