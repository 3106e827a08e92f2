//! Handler for short link redirects.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the not-found page.
///
/// Renders `templates/not_found.html` when a code or alias has no record.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Redirects a code or alias to its stored destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// A single store lookup against the shared code/alias namespace. Found
/// records answer with 307 Temporary Redirect; misses render the not-found
/// page with a 404 status (see [`AppError::NotFound`]). No retry, no
/// caching of negative results.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.links.resolve(&code).await?;

    debug!(code = %link.code, destination = %link.destination, "redirecting");

    Ok(Redirect::temporary(&link.destination))
}
