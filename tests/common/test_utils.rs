use super::mocks::MockRuntime;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use llm_relay::{
    Result,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    server::{self, AppState},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const TEST_TOKEN: &str = "test-token";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        auth_token: TEST_TOKEN.to_string(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            enforce_auth: false,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            provider: "openai".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test-api-key".to_string(),
        },
    }
}

/// Build the relay router around a runtime double
pub fn create_test_app(runtime: MockRuntime, enforce_auth: bool) -> Router {
    server::router(AppState {
        runtime: Arc::new(runtime),
        auth_token: TEST_TOKEN.to_string(),
        enforce_auth,
    })
}

pub fn get_request(uri: &str, authorization: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
auth_token: "s3cret"
server:
  host: "127.0.0.1"
  port: 8081
  enforce_auth: true
  logs:
    level: "debug"
llm:
  provider: "openai"
  base_url: "http://localhost:8000/v1"
  api_key: "sk-test"
"#;
