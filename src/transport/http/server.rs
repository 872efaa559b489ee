use crate::transport::http::{create_router, ApiDoc, AppState};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Serves the deploy page and API on `addr` until Ctrl+C.
pub async fn serve(app_state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let payer = app_state.engine.payer_pubkey();
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("> Deploy server listening on http://{}", listener.local_addr()?);
    info!("> Payer: {}", payer);
    info!("> Swagger UI available at http://{}/swagger-ui", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("> Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
            info!("> Shutdown signal received");
        })
        .await?;

    Ok(())
}
