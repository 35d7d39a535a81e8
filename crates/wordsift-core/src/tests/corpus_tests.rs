use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{
    BuildError, CorpusError, CorpusSource, FrequencyTableBuilder, MeaningEnricher,
    ReferenceCorpusIndex, SharedCorpus,
};

/// Slow source that counts how often it was loaded and can fail its first loads
struct CountingSource {
    loads: AtomicUsize,
    failures_left: AtomicUsize,
}

impl CountingSource {
    fn new(failures: usize) -> Self {
        Self {
            loads: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(failures),
        }
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CorpusSource for CountingSource {
    async fn load(&self) -> Result<HashMap<String, u64>, CorpusError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;

        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failing {
            return Err(CorpusError::NotFound("brown.tsv".to_string()));
        }

        Ok(HashMap::from([("the".to_string(), 69_971), ("fern".to_string(), 7)]))
    }

    fn describe(&self) -> String {
        "counting test source".to_string()
    }
}

struct EmptySource;

#[async_trait::async_trait]
impl CorpusSource for EmptySource {
    async fn load(&self) -> Result<HashMap<String, u64>, CorpusError> {
        Ok(HashMap::new())
    }

    fn describe(&self) -> String {
        "empty".to_string()
    }
}

#[tokio::test]
async fn concurrent_first_use_loads_once() {
    let source = Arc::new(CountingSource::new(0));
    let corpus = Arc::new(SharedCorpus::new(source.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let corpus = Arc::clone(&corpus);
        handles.push(tokio::spawn(async move { corpus.get().await }));
    }

    let mut indexes = Vec::new();
    for handle in handles {
        indexes.push(handle.await.unwrap().unwrap());
    }

    assert_eq!(source.loads(), 1);
    assert!(indexes.iter().all(|index| Arc::ptr_eq(index, &indexes[0])));
    assert_eq!(indexes[0].lookup("fern"), 7);
}

#[tokio::test]
async fn failed_load_is_retried() {
    let source = Arc::new(CountingSource::new(1));
    let corpus = SharedCorpus::new(source.clone());

    assert!(matches!(corpus.get().await, Err(CorpusError::NotFound(_))));
    assert!(!corpus.is_loaded().await);

    let index = corpus.get().await.unwrap();
    assert_eq!(index.lookup("the"), 69_971);
    assert_eq!(source.loads(), 2);
}

#[tokio::test]
async fn reset_forces_reload() {
    let source = Arc::new(CountingSource::new(0));
    let corpus = SharedCorpus::new(source.clone());

    corpus.get().await.unwrap();
    corpus.get().await.unwrap();
    assert_eq!(source.loads(), 1);

    corpus.reset().await;
    assert!(!corpus.is_loaded().await);

    corpus.get().await.unwrap();
    assert_eq!(source.loads(), 2);
}

#[tokio::test]
async fn preloaded_corpus_never_touches_source() {
    let source = Arc::new(CountingSource::new(0));
    let index = ReferenceCorpusIndex::from_counts([("fern", 3u64)]);
    let corpus = SharedCorpus::preloaded(source.clone(), index);

    assert_eq!(corpus.get().await.unwrap().lookup("fern"), 3);
    assert_eq!(source.loads(), 0);
}

#[tokio::test]
async fn empty_corpus_is_unavailable() {
    let corpus = SharedCorpus::new(Arc::new(EmptySource));
    assert!(matches!(corpus.get().await, Err(CorpusError::Empty)));
}

#[tokio::test]
async fn build_fails_when_corpus_is_unavailable() {
    let corpus = Arc::new(SharedCorpus::new(Arc::new(CountingSource::new(usize::MAX))));
    let builder = FrequencyTableBuilder::new(corpus, MeaningEnricher::disabled());

    let result = builder.build("The cat sat.", false).await;
    assert!(matches!(
        result,
        Err(BuildError::CorpusUnavailable(CorpusError::NotFound(_)))
    ));

    // Even an empty passage needs the corpus
    assert!(builder.build("", false).await.is_err());
}
