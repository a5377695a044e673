use crate::transport::http::responses::SuccessResponse;
use crate::transport::http::types::AppState;
use crate::SCHEMA_VERSION;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy; reports the data model generation", body = SuccessResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let stored = state.service.store().len().await;
    (
        StatusCode::OK,
        Json(SuccessResponse::new(serde_json::json!({
            "status": "ok",
            "schemaVersion": SCHEMA_VERSION,
            "storedObjects": stored
        }))),
    )
}
