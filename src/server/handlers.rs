use super::types::{EmbeddingParams, InferenceParams};
use crate::{Error, Result, auth, llm::LlmRuntime};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Content type of every successful reply, even though the body is JSON.
pub const RESPONSE_CONTENT_TYPE: &str = "text/html";

#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<dyn LlmRuntime>,
    pub auth_token: String,
    pub enforce_auth: bool,
}

impl AppState {
    /// Runs the bearer check. A failure is only logged unless enforcement is on.
    fn check_auth(&self, request_id: &Uuid, headers: &HeaderMap) -> Result<()> {
        if auth::validate_request(headers, &self.auth_token) {
            return Ok(());
        }

        warn!("Request {} failed bearer token check", request_id);
        if self.enforce_auth {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}

pub async fn infer(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    let request_id = Uuid::new_v4();
    info!("Received inference request {}", request_id);

    state.check_auth(&request_id, &headers)?;

    let params: InferenceParams = parse_body(&request_id, &body)?;
    debug!(
        "Request {} inferring with model {} ({} prompt bytes)",
        request_id,
        params.model,
        params.prompt.len()
    );

    let result = state
        .runtime
        .infer(&params.model, &params.prompt, params.options)
        .await
        .inspect_err(|e| error!("Inference failed for request {}: {}", request_id, e))?;

    json_reply(&result)
}

pub async fn embed(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    let request_id = Uuid::new_v4();
    info!("Received embedding request {}", request_id);

    state.check_auth(&request_id, &headers)?;

    let params: EmbeddingParams = parse_body(&request_id, &body)?;
    debug!(
        "Request {} embedding {} inputs with model {}",
        request_id,
        params.input.len(),
        params.model
    );

    let result = state
        .runtime
        .generate_embeddings(&params.model, params.input)
        .await
        .inspect_err(|e| error!("Embedding failed for request {}: {}", request_id, e))?;

    json_reply(&result)
}

// The body is decoded whatever content-type the caller sent.
fn parse_body<T: serde::de::DeserializeOwned>(request_id: &Uuid, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        error!("Request {} has an unreadable body: {}", request_id, e);
        Error::from(e)
    })
}

fn json_reply<T: Serialize>(value: &T) -> Result<Response> {
    let body = serde_json::to_string(value)?;
    Ok((StatusCode::OK, [(CONTENT_TYPE, RESPONSE_CONTENT_TYPE)], body).into_response())
}
