use crate::tokenizer::word_spans;
use crate::types::Sentence;

pub const HIGHLIGHT_OPEN: char = '【';
pub const HIGHLIGHT_CLOSE: char = '】';

/// Byte ranges of the word runs in `text` that lowercase to `word`.
///
/// `word` is a token from [`crate::tokenizer::tokenize`], so this uses the same
/// word boundaries and the same case folding as the counts do.
fn occurrences(word: &str, text: &str) -> Vec<(usize, usize)> {
    word_spans(text)
        .filter(|m| m.as_str().to_lowercase() == word)
        .map(|m| (m.start(), m.end()))
        .collect()
}

/// First sentence using `word` as a whole word, with every use highlighted.
///
/// Returns an empty string when no sentence contains the word, which happens
/// when sentence splitting cut through the word's context.
pub fn select_example(word: &str, sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .find_map(|sentence| {
            let ranges = occurrences(word, &sentence.text);
            (!ranges.is_empty()).then(|| wrap_ranges(&sentence.text, &ranges))
        })
        .unwrap_or_default()
}

/// Wrap every whole-word, case-insensitive use of `word` in highlight markers
pub fn highlight(word: &str, sentence: &str) -> String {
    let ranges = occurrences(&word.to_lowercase(), sentence);
    wrap_ranges(sentence, &ranges)
}

/// Remove highlight markers, inverse of [`highlight`]
pub fn strip_highlights(text: &str) -> String {
    text.chars()
        .filter(|c| *c != HIGHLIGHT_OPEN && *c != HIGHLIGHT_CLOSE)
        .collect()
}

fn wrap_ranges(text: &str, ranges: &[(usize, usize)]) -> String {
    let marker_len = HIGHLIGHT_OPEN.len_utf8() + HIGHLIGHT_CLOSE.len_utf8();
    let mut wrapped = String::with_capacity(text.len() + ranges.len() * marker_len);
    let mut last = 0;

    for &(start, end) in ranges {
        wrapped.push_str(&text[last..start]);
        wrapped.push(HIGHLIGHT_OPEN);
        wrapped.push_str(&text[start..end]);
        wrapped.push(HIGHLIGHT_CLOSE);
        last = end;
    }
    wrapped.push_str(&text[last..]);

    wrapped
}
