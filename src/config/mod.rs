mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    load_from(&config_path).await
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    apply_env_overrides(&mut config, env::var("AUTH_TOKEN").ok());

    Ok(config)
}

/// Replaces values from the file with those taken from the environment.
pub fn apply_env_overrides(config: &mut Config, auth_token: Option<String>) {
    if let Some(token) = auth_token {
        debug!("auth_token overridden from environment");
        config.auth_token = token;
    }
}
