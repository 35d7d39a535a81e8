#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Corpus not found: {0}")]
    NotFound(String),

    #[error("Invalid corpus format: {0}")]
    InvalidFormat(String),

    #[error("Corpus is empty")]
    Empty,

    #[error("Corpus download failed: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Reference corpus unavailable: {0}")]
    CorpusUnavailable(#[from] CorpusError),
}
