use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::{LookupError, MeaningLookup, ProviderMetadata};

/// Elements holding the short Chinese gloss on a Youdao result page
const MEANING_SELECTOR: &str = ".simple.dict-module .word-exp";

/// Chinese meaning lookup scraped from the Youdao dictionary web page
#[derive(Clone)]
pub struct YoudaoLookup {
    client: reqwest::Client,
    base_url: String,
}

impl YoudaoLookup {
    pub fn new(base_url: String, user_agent: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl MeaningLookup for YoudaoLookup {
    async fn lookup(&self, word: &str) -> Result<String, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("word", word), ("lang", "en")])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Youdao lookup '{}': HTTP {}", word, status);

        if !status.is_success() {
            return Err(LookupError::Api(format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        extract_meaning(&body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Youdao".to_string(),
            target_language: "zh".to_string(),
            requires_network: true,
        }
    }
}

/// Concatenate the text of every gloss element, empty when the page has none
pub fn extract_meaning(html: &str) -> Result<String, LookupError> {
    let selector = Selector::parse(MEANING_SELECTOR)
        .map_err(|e| LookupError::InvalidResponse(format!("bad selector: {e:?}")))?;

    let document = Html::parse_document(html);
    let meaning = document
        .select(&selector)
        .flat_map(|element| element.text())
        .collect::<String>();

    Ok(meaning)
}
