use crate::transport::http::handlers::common::error_response;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/lamports",
    responses(
        (status = 200, description = "Airdrop confirmed; returns the new payer balance", body = ApiResponse),
        (status = 502, description = "RPC error", body = ApiResponse),
        (status = 504, description = "Airdrop did not confirm in time", body = ApiResponse)
    )
)]
pub async fn lamports_handler(State(state): State<AppState>) -> impl IntoResponse {
    info!("> API: airdrop requested");
    match state.engine.request_lamports().await {
        Ok(balance) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({
                "payer": state.engine.payer_pubkey().to_string(),
                "airdrop_lamports": state.engine.settings().airdrop_lamports,
                "balance": balance,
            }))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/balance",
    responses(
        (status = 200, description = "Current payer balance", body = ApiResponse),
        (status = 502, description = "RPC error", body = ApiResponse)
    )
)]
pub async fn balance_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.engine.balance().await {
        Ok(balance) => {
            let required = state.engine.settings().min_balance;
            (
                StatusCode::OK,
                Json(ApiResponse::ok(serde_json::json!({
                    "payer": state.engine.payer_pubkey().to_string(),
                    "balance": balance,
                    "required": required,
                    "can_deploy": balance >= required,
                }))),
            )
                .into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}
