use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_base_url() -> String {
    "https://dict.youdao.com/result".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_concurrency() -> usize {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MeaningConfig {
    /// Look up meanings unless the command line says otherwise
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Lookups in flight at once, 1 is sequential
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for MeaningConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
            concurrency: default_concurrency(),
        }
    }
}
