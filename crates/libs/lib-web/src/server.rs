//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! The router serves the compiled front end from the dist directory. Any path
//! that is not a file falls back to `index.html` so client-side routes survive
//! a reload. Unknown `/api/*` paths answer with a JSON 404 instead.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, stamp_req, RequestStamp};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{any, get, post},
    Router,
};
use lib_core::{init_config, AppError, Config};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl axum::extract::FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Setup
/// Install the global `tracing` subscriber. The level comes from `LOG_LEVEL`.
fn init_tracing() -> anyhow::Result<String> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => EnvFilter::new(&log_level),
        _ => EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))?;

    Ok(log_level)
}

pub async fn start_server() -> anyhow::Result<()> {
    let log_level = init_tracing()?;
    info!(" SITE SERVER STARTING");
    info!(" Log level: {}", log_level);

    info!("Loading configuration...");
    let config = init_config().map_err(|e| anyhow::anyhow!(e))?;

    let index = config.dist_dir.join("index.html");
    if index.is_file() {
        info!("Serving site from {}", config.dist_dir.display());
    } else {
        warn!(
            "No index.html in {}; build the front end first. Only the API will respond.",
            config.dist_dir.display()
        );
    }

    let app = build_router(AppState::new(config.clone()));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT_LANGUAGE])
}

async fn api_not_found() -> AppError {
    AppError::NotFound("No such endpoint".to_string())
}

/// Router with API routes, static hosting and middleware.
pub fn build_router(state: AppState) -> Router {
    let dist_dir = state.config.dist_dir.clone();
    let static_site =
        ServeDir::new(&dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/api/contact", post(handlers::contact::submit_contact))
        .route("/api/{*path}", any(api_not_found))
        .route("/health", get(handlers::health::health))
        .with_state(state)
        .fallback_service(static_site)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestStamp>()
                    .map(|s| s.id.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!(" API:");
    info!("   • POST /api/contact");
    info!(" HEALTH:");
    info!("   • GET  /health");
    info!(" SITE:");
    info!("   • GET  /*  (static files, index.html fallback)");
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use shared::ErrorResponse;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn app_with_dist(dist_dir: PathBuf) -> Router {
        build_router(AppState::new(Config {
            dist_dir,
            ..Config::default()
        }))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    /// Fresh dist directory with an `index.html`.
    fn temp_dist() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("site-dist-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>site</html>").unwrap();
        std::fs::write(dir.join("style.css"), "body{}").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with_dist(PathBuf::from("target/no-such-dist"));

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let app = app_with_dist(PathBuf::from("target/no-such-dist"));

        let response = app.oneshot(get_request("/api/careers")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NotFound");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        // Arrange
        let dist = temp_dist();

        // Act
        let asset = app_with_dist(dist.clone())
            .oneshot(get_request("/style.css"))
            .await
            .unwrap();
        let page = app_with_dist(dist.clone())
            .oneshot(get_request("/media?lang=ar"))
            .await
            .unwrap();

        // Assert
        assert_eq!(asset.status(), StatusCode::OK);
        assert_eq!(page.status(), StatusCode::OK);
        let body = axum::body::to_bytes(page.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"<html>site</html>");

        std::fs::remove_dir_all(dist).ok();
    }

    #[tokio::test]
    async fn test_every_response_is_stamped() {
        let app = app_with_dist(PathBuf::from("target/no-such-dist"));

        let response = app.oneshot(get_request("/health")).await.unwrap();

        let id = response.headers().get("x-request-id").unwrap();
        assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let app = app_with_dist(PathBuf::from("target/no-such-dist"));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/contact")
            .header("origin", "http://localhost:8080")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:8080"
        );
    }
}
