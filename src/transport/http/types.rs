use crate::domain::deploy::DeployEngine;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared handler state. The engine is built once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DeployEngine>,
}

impl AppState {
    pub fn new(engine: DeployEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Form value of the deploy page.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct DeployRequest {
    /// Path of the compiled program binary on the server's filesystem.
    pub filepath: String,
}

/// Largest program upload accepted by `/api/deploy/upload`.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::err(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}
