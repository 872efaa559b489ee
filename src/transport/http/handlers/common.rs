use crate::error::DeployError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::Json;

pub fn status_for(err: &DeployError) -> StatusCode {
    match err {
        DeployError::InsufficientFunds { .. } => StatusCode::PAYMENT_REQUIRED,
        DeployError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        DeployError::ReadProgram { .. } | DeployError::EmptyProgram { .. } => {
            StatusCode::BAD_REQUEST
        }
        DeployError::Rpc(_) => StatusCode::BAD_GATEWAY,
        DeployError::Keypair(_) | DeployError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(err: DeployError) -> (StatusCode, Json<ApiResponse>) {
    (status_for(&err), Json(ApiResponse::err(err.to_string())))
}
