use std::path::Path;

use anyhow::Context;
use wordsift_config::Config;

/// Profile picked up from the working directory when no `--config` is given
const DEFAULT_PROFILE: &str = "wordsift.json";

/// Load the explicit profile, else the default one if present, else env + defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    let default_profile = Path::new(DEFAULT_PROFILE);
    if default_profile.exists() {
        return Config::load(default_profile)
            .with_context(|| format!("Failed to load config {}", DEFAULT_PROFILE));
    }

    tracing::debug!("No config file, using defaults and environment");
    Ok(Config::new())
}
