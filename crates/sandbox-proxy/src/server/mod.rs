pub mod cli;
mod form;

use crate::prelude::{eprintln, *};
use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use sandbox_proxy_core::config::ProxyConfig;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

/// Route the sandbox handler is mounted on.
pub const SANDBOX_ROUTE: &str = "/api/sandbox";

pub async fn run(options: cli::ServeOptions, global: crate::Global) -> Result<()> {
    let config = Arc::new(global.backend.resolve());

    if global.verbose {
        eprintln!(
            "Starting sandbox proxy on {}:{}...",
            options.host, options.port
        );
        eprintln!("Backend: {}", config.base_url);
        eprintln!("Model: {}", config.model);
        eprintln!(
            "Authorization: {}",
            if config.api_key.is_some() {
                "bearer"
            } else {
                "none"
            }
        );
    }

    let addr = format!("{}:{}", options.host, options.port);
    let app_router = router(config, &options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Sandbox endpoint: http://{addr}{SANDBOX_ROUTE}");

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Build the application router with its body-limit, timeout and CORS layers.
pub fn router(config: Arc<ProxyConfig>, options: &cli::ServeOptions) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(SANDBOX_ROUTE, post(sandbox_handler))
        .layer(DefaultBodyLimit::max(options.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(options.max_duration),
        ))
        .layer(cors)
        .with_state(config)
}

async fn sandbox_handler(
    State(config): State<Arc<ProxyConfig>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<serde_json::Value>, Error> {
    let multipart = multipart.map_err(|e| Error::FormParse(e.body_text()))?;
    let submission = form::read_submission(multipart).await?;

    let reply = crate::sandbox::proxy_submission(&config, &submission).await?;

    Ok(Json(reply))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        log::error!("{self}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
