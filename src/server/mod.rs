//! HTTP layer: router, shared state, CORS, and the serve loop.
//!
//! Every response — success, validation failure, or pipeline error —
//! carries the permissive CORS headers, and an `OPTIONS` request to any
//! route short-circuits to `200` with no body. The state holds only the
//! shared HTTP client; all request data is scoped to a single pipeline
//! run.

use anyhow::Context;
use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::config::Config;

mod routes;

/// Shared handler state. Cloned per request; the reqwest client is
/// internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }
}

/// Build the gateway router: `/` (JSON mode) and `/rss` (RSS mode),
/// wrapped in the CORS middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::inner_texts))
        .route("/rss", get(routes::rss))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Stamp CORS headers on every response and answer preflight directly.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// Bind the configured address and serve until shutdown.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(&config).context("Failed to build HTTP client")?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "pagefeed listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
