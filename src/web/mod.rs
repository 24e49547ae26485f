// Web server: Axum front end for the lookup service.
//
// Routes:
//   POST /uuid          names -> identifiers
//   GET  /profile/{id}  single profile with properties
//   GET  /health        liveness check
//
// The router only depends on the ProfileResolver trait; `run_server` wires
// in the live Mojang client.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::profile::client::ProfileResolver;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn ProfileResolver>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(resolver: Arc<dyn ProfileResolver>, port: u16, bind: &str) -> Result<()> {
    let app = build_router(AppState { resolver });

    let addr = format!("{bind}:{port}");
    info!("Player index listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router. Public so embedders can mount it.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/uuid", post(handlers::lookup::lookup_uuids))
        .route("/uuid/", post(handlers::lookup::lookup_uuids))
        .route("/profile/{id}", get(handlers::profile::get_profile))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
