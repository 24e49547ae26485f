// POST /uuid: translate a batch of player names into identifiers.
//
// Body: ["Notch", "jeb_"]
// Response: ["069a79f4-44e9-4726-a5be-fca90e38aaf5", ...]
//
// Names with no matching player are left out of the response. An upstream
// failure is reported as 502 instead of an empty list so callers can tell
// "nobody by that name" from "Mojang is down".

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::profile::extract::lookup_identifiers;
use crate::profile::identifier::dashed;
use crate::web::{api_error, AppState};

/// POST /uuid: resolve names to dashed identifier strings.
pub async fn lookup_uuids(
    State(state): State<AppState>,
    Json(names): Json<Vec<String>>,
) -> Response {
    match lookup_identifiers(state.resolver.as_ref(), &names).await {
        Ok(ids) => {
            // Sorted so identical requests produce identical bodies
            let mut ids: Vec<String> = ids.iter().map(dashed).collect();
            ids.sort();
            Json(ids).into_response()
        }
        Err(e) => {
            warn!(error = %e, requested = names.len(), "UUID lookup failed");
            api_error(StatusCode::BAD_GATEWAY, "Upstream profile lookup failed")
        }
    }
}
