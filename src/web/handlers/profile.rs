// GET /profile/{id}: fetch one profile, properties included.
//
// Accepts the identifier dashed or undashed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::profile::client::ProfileResolver;
use crate::profile::identifier::parse_identifier;
use crate::web::{api_error, AppState};

pub async fn get_profile(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_identifier(&raw_id) {
        Ok(id) => id,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.resolver.fetch_by_id(&id).await {
        Ok(Some(profile)) => Json(profile).into_response(),
        Ok(None) => api_error(StatusCode::NOT_FOUND, "Profile not found"),
        Err(e) => {
            warn!(error = %e, id = %id, "Profile lookup failed");
            api_error(StatusCode::BAD_GATEWAY, "Upstream profile lookup failed")
        }
    }
}
