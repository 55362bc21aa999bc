use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Returns true when the `authorization` header is exactly `bearer <secret>`.
///
/// The scheme is matched case-sensitively; `Bearer <secret>` does not pass.
pub fn validate_request(headers: &HeaderMap, secret: &str) -> bool {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return false;
    };

    match value.to_str() {
        Ok(value) => value.strip_prefix("bearer ") == Some(secret),
        Err(_) => false,
    }
}
