use std::collections::HashMap;

use wordsift_core::tokenizer::tokenize;

/// Count every word of a raw text corpus
pub fn parse(content: &str) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for token in tokenize(content) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lowercase_tokens() {
        let counts = parse("The Fulton County Grand Jury said Friday. The jury said.");
        assert_eq!(counts["the"], 2);
        assert_eq!(counts["jury"], 2);
        assert_eq!(counts["friday"], 1);
        assert!(!counts.contains_key("The"));
    }
}
