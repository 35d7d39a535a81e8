use std::sync::Arc;
use std::time::Duration;

use wordsift_config::Config;
use wordsift_core::{FrequencyTableBuilder, MeaningEnricher, SharedCorpus};
use wordsift_meaning::{MeaningLookup, NoMeaning, YoudaoLookup};

pub struct AppState {
    pub config: Config,
    pub builder: FrequencyTableBuilder,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source = wordsift_corpus::source_from_config(&config.corpus);
        tracing::debug!("Reference corpus source: {}", source.describe());
        let corpus = Arc::new(SharedCorpus::new(source));

        let lookup = meaning_lookup(&config);
        let enricher = MeaningEnricher::new(lookup, config.meaning.concurrency);
        let builder = FrequencyTableBuilder::new(corpus, enricher);

        Self { config, builder }
    }
}

fn meaning_lookup(config: &Config) -> Arc<dyn MeaningLookup> {
    let timeout = Duration::from_secs(config.meaning.timeout_seconds);

    match YoudaoLookup::new(
        config.meaning.base_url.clone(),
        &config.meaning.user_agent,
        timeout,
    ) {
        Ok(lookup) => Arc::new(lookup),
        Err(e) => {
            tracing::error!("Failed to initialize meaning lookup: {}", e);
            tracing::warn!("Meanings will be empty");
            Arc::new(NoMeaning)
        }
    }
}
