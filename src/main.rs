use anyhow::Result;
use llm_relay::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the log filter. A `RUST_LOG` directive wins over the configured level.
fn log_filter(rust_log: Option<&str>, config_level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log {
        return EnvFilter::try_new(directives).map_err(|e| {
            anyhow::anyhow!("Invalid RUST_LOG directive '{}': {}", directives, e)
        });
    }

    let level = config_level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            config_level
        )
    })?;
    Ok(EnvFilter::new(level.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration is loaded before logging so its level can drive the filter
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match log_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(
        "Starting llm-relay with log filter: {}",
        rust_log.as_deref().unwrap_or(&config.server.logs.level)
    );

    server::run(config).await?;

    Ok(())
}
