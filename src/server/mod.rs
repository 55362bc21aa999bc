pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{EmbeddingParams, InferenceParams};

use crate::{Result, config::Config, llm::create_runtime};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/infer", get(handlers::infer))
        .route("/embedd", get(handlers::embed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let runtime = create_runtime(&config.llm)?;

    if !config.server.enforce_auth {
        warn!("Bearer token check is not enforced; unauthenticated requests will be served");
    }

    let app_state = AppState {
        runtime,
        auth_token: config.auth_token.clone(),
        enforce_auth: config.server.enforce_auth,
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
