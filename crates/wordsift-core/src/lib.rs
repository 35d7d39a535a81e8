pub mod classifier;
pub mod corpus;
pub mod enrich;
pub mod error;
pub mod example;
pub mod table;
pub mod tokenizer;
pub mod types;

#[cfg(test)]
mod tests;

pub use classifier::classify;
pub use corpus::{CorpusSource, MemoryCorpusSource, ReferenceCorpusIndex, SharedCorpus};
pub use enrich::MeaningEnricher;
pub use error::{BuildError, CorpusError};
pub use table::{FrequencyTableBuilder, MAX_REFERENCE_FREQUENCY, tabulate};
pub use types::{FrequencyLevel, FrequencyTable, Sentence, WordRow};
