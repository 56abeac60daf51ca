use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::server::{service::health::HealthService, state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Check that the database is reachable.
#[utoipa::path(
    get,
    path = "/check-db-connection",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "`connected` or `unable to connect`", body = String, content_type = "text/plain")
    ),
)]
pub async fn check_db_connection(State(state): State<AppState>) -> impl IntoResponse {
    let message = if HealthService::new(&state.db).is_connected().await {
        "connected"
    } else {
        "unable to connect"
    };

    (StatusCode::OK, message)
}
