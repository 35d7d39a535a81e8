use serde::{Serialize, Serializer};

/// How common a word is in the reference corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyLevel {
    High,
    Medium,
    Low,
}

impl FrequencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyLevel::High => "High frequency",
            FrequencyLevel::Medium => "Medium frequency",
            FrequencyLevel::Low => "Low frequency",
        }
    }
}

impl Serialize for FrequencyLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A sentence of the input text with newlines flattened to spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
}

/// One word of the frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRow {
    pub word: String,
    /// Occurrences in the reference corpus
    pub reference_frequency: u64,
    pub level: FrequencyLevel,
    /// Occurrences in the analysed passage
    pub text_frequency: u32,
    /// First sentence using the word, with the word highlighted
    pub example: String,
    /// `None` when meanings were not requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// Rows ranked by descending reference frequency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    pub rows: Vec<WordRow>,
}

impl FrequencyTable {
    pub fn new(rows: Vec<WordRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordRow> {
        self.rows.iter()
    }

    /// Rows paired with their 1-based display rank
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &WordRow)> {
        self.rows.iter().enumerate().map(|(i, row)| (i + 1, row))
    }

    pub fn includes_meaning(&self) -> bool {
        self.rows.iter().any(|row| row.meaning.is_some())
    }

    pub fn get(&self, word: &str) -> Option<&WordRow> {
        self.rows.iter().find(|row| row.word == word)
    }
}
