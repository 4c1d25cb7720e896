mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;
    config.llm.apply_api_key_override(env::var(API_KEY_ENV).ok());
    config.validate()?;

    Ok(config)
}

/// Reads and parses a YAML config file without environment overrides or validation.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "no API key configured; set llm.api_key or {}",
                API_KEY_ENV
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        if self.llm.max_tokens == 0 {
            return Err(Error::config("llm.max_tokens must be greater than zero"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be greater than zero"));
        }
        if !self.server.path.starts_with('/') {
            return Err(Error::config(format!(
                "server.path must start with '/': {}",
                self.server.path
            )));
        }
        Ok(())
    }
}
