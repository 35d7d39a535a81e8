use std::sync::LazyLock;

use regex::{Match, Regex};

use crate::types::Sentence;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Terminal punctuation followed by the whitespace run that ends a sentence
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern is valid"));

/// Lowercase word tokens in document order.
///
/// A token is a maximal run of Unicode word characters, so digits and
/// underscores are kept and no stemming happens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Word runs of `text` in its original casing, as matches into `text`
pub(crate) fn word_spans(text: &str) -> impl Iterator<Item = Match<'_>> {
    WORD_RE.find_iter(text)
}

/// Split text after `.`, `!` or `?` when whitespace follows.
///
/// Colons and semicolons never end a sentence. Newlines inside a sentence
/// become single spaces; original casing is kept.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END_RE.find_iter(text) {
        // The punctuation is ASCII, so it is exactly one byte
        let end = m.start() + 1;
        push_sentence(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<Sentence>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    sentences.push(Sentence {
        text: raw.replace('\n', " "),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn tokens_are_lowercase_word_runs() {
        assert_eq!(
            tokenize("The cat's Seed-bearing ferns, 200 years!"),
            vec!["the", "cat", "s", "seed", "bearing", "ferns", "200", "years"]
        );
    }

    #[test]
    fn tokens_keep_unicode_letters() {
        assert_eq!(tokenize("Café NAÏVE"), vec!["café", "naïve"]);
    }

    #[test]
    fn empty_text_has_no_tokens_or_sentences() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn splits_on_terminal_punctuation_followed_by_whitespace() {
        let sentences = split_sentences("The cat sat. The dog ran! Did it?  Yes.");
        assert_eq!(
            texts(&sentences),
            vec!["The cat sat.", "The dog ran!", "Did it?", "Yes."]
        );
    }

    #[test]
    fn colon_and_semicolon_do_not_end_sentences() {
        let sentences = split_sentences("Which followed: angiosperms increased; flora grew. Next.");
        assert_eq!(
            texts(&sentences),
            vec!["Which followed: angiosperms increased; flora grew.", "Next."]
        );
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        let sentences = split_sentences("Version 1.5 of e.g.this works.");
        assert_eq!(texts(&sentences), vec!["Version 1.5 of e.g.this works."]);
    }

    #[test]
    fn newlines_inside_sentences_become_spaces() {
        let sentences = split_sentences("\nEvolution of the\nFlowering Plants.\n\n\nMany aspects.\n");
        assert_eq!(
            texts(&sentences),
            vec![" Evolution of the Flowering Plants.", "Many aspects."]
        );
    }
}
