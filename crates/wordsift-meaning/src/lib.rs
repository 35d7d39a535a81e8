pub mod youdao;

pub use youdao::YoudaoLookup;

/// Meaning provider interface
#[async_trait::async_trait]
pub trait MeaningLookup: Send + Sync {
    /// Look up the meaning of a single word, empty if the provider has none
    async fn lookup(&self, word: &str) -> Result<String, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub target_language: String,
    pub requires_network: bool,
}

/// Provider that never knows any meaning
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMeaning;

#[async_trait::async_trait]
impl MeaningLookup for NoMeaning {
    async fn lookup(&self, _word: &str) -> Result<String, LookupError> {
        Ok(String::new())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "none".to_string(),
            target_language: String::new(),
            requires_network: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_meaning_is_always_empty() {
        let provider = NoMeaning;
        assert_eq!(provider.lookup("angiosperm").await.unwrap(), "");
        assert!(!provider.metadata().requires_network);
    }
}
