//! Application error taxonomy and HTTP mapping.
//!
//! Every variant knows how to present itself: user-correctable outcomes
//! render HTML pages with a success status, genuine misses render the
//! not-found page, and store faults surface as server errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::web::handlers::index::IndexTemplate;
use crate::web::handlers::redirect::NotFoundTemplate;

/// Errors surfaced by the shorten and redirect flows.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested custom alias already exists as a code or alias.
    ///
    /// User-correctable: the input form is re-rendered with an inline
    /// message and an HTTP success status, not an error status.
    #[error("alias '{alias}' is already taken")]
    AliasTaken { alias: String },

    /// No link matches the requested code or alias.
    #[error("no link found for '{code}'")]
    NotFound { code: String },

    /// Random code generation kept colliding with stored codes.
    #[error("failed to generate a unique code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    /// The link store could not be reached or rejected a query.
    #[error("link store unavailable")]
    StoreUnavailable(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::AliasTaken { alias } => {
                tracing::debug!(%alias, "alias conflict, re-rendering form");
                let page = IndexTemplate {
                    error: Some("Alias already taken. Please enter another alias.".to_string()),
                };
                (StatusCode::OK, page).into_response()
            }
            AppError::NotFound { code } => {
                tracing::debug!(%code, "unknown code or alias");
                (StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response()
            }
            AppError::CodeSpaceExhausted { attempts } => {
                tracing::error!(attempts, "shortcode generation exhausted");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.").into_response()
            }
            AppError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "link store unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.").into_response()
            }
        }
    }
}
