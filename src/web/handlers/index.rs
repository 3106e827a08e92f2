//! Input form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the input form.
///
/// Renders `templates/index.html` with the URL and alias fields. The
/// optional `error` message is shown inline when an alias conflict sends
/// the user back to the form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub error: Option<String>,
}

/// Renders the input form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate { error: None }
}
