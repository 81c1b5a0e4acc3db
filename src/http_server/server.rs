//! # HTTP Server
//!
//! Main HTTP server combining all trivia routers.

use std::any::Any;
use std::sync::Arc;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_LENGTH,
    CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method, StatusCode, Uri};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{ApiError, ErrorResponse};
use crate::store::Store;

use super::category_routes::category_routes;
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::question_routes::question_routes;
use super::quiz_routes::quiz_routes;
use super::state::TriviaState;

const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
const ALLOWED_METHODS: &str = "GET, POST, DELETE";

/// HTTP server for the trivia API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: Store) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Store) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!(addr = %listener.local_addr()?, "trivia API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("trivia API stopped");
        Ok(())
    }
}

/// Build the combined router with all endpoints and middleware
pub fn build_router(config: &HttpServerConfig, store: Store) -> Router {
    let state = Arc::new(TriviaState::new(store));

    Router::new()
        .merge(health_routes())
        .merge(category_routes(state.clone()))
        .merge(question_routes(state.clone()))
        .merge(quiz_routes(state))
        .fallback(fallback_handler)
        .layer(middleware::map_response(envelope_bare_errors))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(cors_layer(config))
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    if config.cors_origins.is_empty() {
        cors.allow_origin(AnyOrigin)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}

/// Give error responses produced outside the handlers (405 from method
/// routing, 413 from body limits) the JSON error envelope.
///
/// A 405 on a path whose id segment is not an integer becomes 404: such a
/// path names no resource, whatever the method.
async fn envelope_bare_errors(uri: Uri, response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    if status == StatusCode::METHOD_NOT_ALLOWED && has_non_integer_id(uri.path()) {
        return ApiError::NotFound.into_response();
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);

    let envelope = if status == StatusCode::METHOD_NOT_ALLOWED {
        ApiError::MethodNotAllowed.into_response()
    } else {
        (status, Json(ErrorResponse::for_status(status))).into_response()
    };

    let (envelope_parts, body) = envelope.into_parts();
    parts.headers.extend(envelope_parts.headers);
    Response::from_parts(parts, body)
}

/// True for `/questions/<id>` and `/categories/<id>/questions` when `<id>`
/// is not an integer.
fn has_non_integer_id(path: &str) -> bool {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let id = match segments.as_slice() {
        ["questions", "search"] => return false,
        ["questions", id] | ["categories", id, "questions"] => *id,
        _ => return false,
    };
    id.parse::<i32>().is_err()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal("handler panicked".to_string()).into_response()
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
