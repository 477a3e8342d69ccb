//! HTTP front end: a single `POST /generate` endpoint.
//!
//! The body is taken as raw bytes so every failure mode stays under the
//! handler's control:
//!
//! | outcome                                   | status |
//! |-------------------------------------------|--------|
//! | missing keys, missing `id`, bad names     | 400    |
//! | unparseable body, wrong shapes, I/O, etc. | 500    |
//! | files written                             | 200    |
//!
//! Error bodies are `{"error": "<message>"}`; success is
//! `{"status": "Java files generated successfully!"}`.

// Internal imports (std, crate)
use std::sync::Arc;

use crate::{config::Config, error::Result, generate::Generator, request::GenerationRequest};

// External imports (alphabetized)
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use tokio::net::TcpListener;

/// Route of the generation endpoint
pub const GENERATE_PATH: &str = "/generate";

/// Status message returned on success
pub const SUCCESS_MESSAGE: &str = "Java files generated successfully!";

/// Build the router serving [`GENERATE_PATH`]
pub fn router(generator: Arc<Generator>) -> Router {
    Router::new()
        .route(GENERATE_PATH, post(generate_handler))
        .with_state(generator)
}

async fn generate_handler(State(generator): State<Arc<Generator>>, body: Bytes) -> Response {
    let request = match GenerationRequest::from_slice(&body) {
        Ok(request) => request,
        Err(e) if e.is_validation() => {
            log::warn!("Rejected generation request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
        Err(e) => {
            log::error!("Unreadable generation request: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    match generator.generate(&request).await {
        Ok(paths) => {
            log::info!(
                "Generated {} files for entity {} in {}",
                paths.len(),
                request.entity,
                request.project_root().display()
            );
            (StatusCode::OK, Json(json!({ "status": SUCCESS_MESSAGE }))).into_response()
        }
        Err(e) => {
            log::error!("Generation failed for entity {}: {}", request.entity, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: &Config) -> Result<()> {
    let generator = Arc::new(Generator::new()?);
    let listener = TcpListener::bind(config.bind_address).await?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(generator))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    log::info!("Server stopped");
    Ok(())
}
