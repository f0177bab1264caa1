use std::path::PathBuf;

use ::config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct SourceConfig {
    pub source_dir: PathBuf,
    pub extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source_dir: ".".into(),
            extension: "qs".to_string(),
        }
    }
}

/// Coalesce env vars with defaults to get a `SourceConfig`.
pub fn get_source_config() -> Result<SourceConfig, ConfigError> {
    let config = Config::builder()
        .add_source(::config::Environment::with_prefix("SRCMAP"))
        .set_default("source_dir", ".")?
        .set_default("extension", "qs")?
        .build()?;
    config.try_deserialize()
}
