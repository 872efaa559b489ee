use crate::transport::http::handlers::{deploy, health, lamports, page};
use crate::transport::http::types::{ApiResponse, AppState, DeployRequest, MAX_UPLOAD_BYTES};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        deploy::deploy_handler,
        deploy::upload_handler,
        lamports::lamports_handler,
        lamports::balance_handler
    ),
    components(schemas(ApiResponse, DeployRequest))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(page::deploy_page_handler))
        .route("/health", get(health::healthcheck_handler))
        .route("/api/deploy", post(deploy::deploy_handler))
        .route(
            "/api/deploy/upload",
            post(deploy::upload_handler).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/lamports", post(lamports::lamports_handler))
        .route("/api/balance", get(lamports::balance_handler))
        .with_state(app_state)
}
