//! Handler for the shorten endpoint.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Form fields submitted from the input page.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: String,
    pub alias: Option<String>,
}

/// Template for the result page.
///
/// Renders `templates/shorten.html` with the resulting code, the full short
/// URL, and an optional decorative picture.
#[derive(Template, WebTemplate)]
#[template(path = "shorten.html")]
pub struct ShortenTemplate {
    pub code: String,
    pub short_url: String,
    pub picture: Option<String>,
}

/// Creates a short link from the submitted form.
///
/// # Endpoint
///
/// `POST /shorten` with fields `url` (required) and `alias` (optional; an
/// empty field is treated as absent).
///
/// # Responses
///
/// - Success: the result page with the code. Submitting the same URL twice
///   without an alias returns the same code both times.
/// - Alias conflict: the input form again, with an inline message and an
///   HTTP success status (see [`AppError::AliasTaken`]).
///
/// # Side Effects
///
/// One store read and at most one write, plus a best-effort picture fetch
/// whose failure never affects the result.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<ShortenTemplate, AppError> {
    let alias = form.alias.filter(|alias| !alias.is_empty());

    let link = state.links.shorten(&form.url, alias).await?;
    let picture = state.pictures.random_picture().await;

    Ok(ShortenTemplate {
        short_url: state.links.short_url(&link.code),
        code: link.code,
        picture,
    })
}
