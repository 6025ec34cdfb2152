//! HTTP front for the Pexels API.
//!
//! # Overview
//! An axum router that forwards each route to one `PexelsClient` call and
//! returns the decoded JSON. Every response gets permissive CORS headers;
//! `OPTIONS` is answered with 204 before routing.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use pexels_core::PexelsClient;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::{AppError, ErrorResponse};
pub use handlers::{AppState, HealthResponse, InfoResponse};

/// Routes served, in the order they are announced at startup.
pub const ENDPOINTS: &[&str] = &[
    "GET /photos/search?query=nature&page=1&per_page=10",
    "GET /photos/curated?page=1&per_page=10",
    "GET /photos/{id}",
    "GET /photos/random",
    "GET /videos/search?query=nature&page=1&per_page=10",
    "GET /videos/popular?page=1&per_page=10",
    "GET /videos/random",
    "GET /info",
    "GET /health",
];

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str =
    "Origin, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

pub fn app(client: Arc<PexelsClient>) -> Router {
    Router::new()
        .route("/photos/search", get(handlers::search_photos))
        .route("/photos/curated", get(handlers::curated_photos))
        .route("/photos/random", get(handlers::random_photo))
        .route("/photos/{id}", get(handlers::get_photo))
        .route("/videos/search", get(handlers::search_videos))
        .route("/videos/popular", get(handlers::popular_videos))
        .route("/videos/random", get(handlers::random_video))
        .route("/info", get(handlers::info))
        .route("/health", get(handlers::health))
        .with_state(client)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, client: Arc<PexelsClient>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(client))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Short-circuit preflights and stamp CORS headers on everything else.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        let mut response = next.run(request).await;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(error = %err, "failed to listen for ctrl-c, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
