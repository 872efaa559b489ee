use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (RPC reachable)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (RPC unreachable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let payer = state.engine.payer_pubkey().to_string();
    match state.engine.balance().await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::ok(
                serde_json::json!({ "status": "ok", "payer": payer }),
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                data: Some(serde_json::json!({ "status": "unhealthy", "payer": payer })),
                error: Some(format!("RPC ping failed: {}", e)),
            }),
        )
            .into_response(),
    }
}
