use crate::transport::http::handlers::common::error_response;
use crate::transport::http::types::{json_422, ApiResponse, AppState, DeployRequest};
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

#[utoipa::path(
    post,
    path = "/api/deploy",
    request_body = DeployRequest,
    responses(
        (status = 200, description = "Program deployed", body = ApiResponse),
        (status = 400, description = "Program file unreadable or empty", body = ApiResponse),
        (status = 402, description = "Payer balance below the deploy threshold", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse),
        (status = 502, description = "RPC or loader error", body = ApiResponse),
        (status = 504, description = "Deployment did not complete in time", body = ApiResponse)
    )
)]
pub async fn deploy_handler(
    State(state): State<AppState>,
    request: Result<Json<DeployRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ \"filepath\": string }").into_response(),
    };

    let filepath = request.filepath.trim();
    if filepath.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err("filepath must not be empty")),
        )
            .into_response();
    }

    info!("> API: deploy requested for {}", filepath);
    run_deploy(&state, Path::new(filepath)).await
}

#[utoipa::path(
    post,
    path = "/api/deploy/upload",
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Program deployed", body = ApiResponse),
        (status = 400, description = "Empty upload", body = ApiResponse),
        (status = 402, description = "Payer balance below the deploy threshold", body = ApiResponse),
        (status = 502, description = "RPC or loader error", body = ApiResponse),
        (status = 504, description = "Deployment did not complete in time", body = ApiResponse)
    )
)]
pub async fn upload_handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    info!("> API: deploy requested for uploaded binary ({} bytes)", body.len());

    // The file lives until this handler returns.
    let staged = match stage_upload(&body) {
        Ok(f) => f,
        Err(e) => {
            warn!("> API: failed to stage upload: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::err(format!("Failed to stage upload: {}", e))),
            )
                .into_response();
        }
    };

    run_deploy(&state, staged.path()).await
}

async fn run_deploy(state: &AppState, path: &Path) -> axum::response::Response {
    match state.engine.deploy(path).await {
        Ok(report) => (StatusCode::OK, Json(ApiResponse::ok(report.to_json()))).into_response(),
        Err(e) => {
            warn!("> API: deploy failed: {}", e);
            error_response(e).into_response()
        }
    }
}

fn stage_upload(bytes: &[u8]) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(".so")
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}
