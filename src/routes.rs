//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Input form
//! - `POST /shorten`  - Create a short link from the form
//! - `GET  /{code}`   - Short link redirect (code or alias)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web::handlers::{index_handler, redirect_handler, shorten_handler};
use crate::web::middleware::tracing;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static routes take priority over the `/{code}` capture, so `/shorten`
/// is never interpreted as a redirect candidate.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
