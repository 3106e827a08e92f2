//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::pictures::PictureService;

/// Application state shared across all HTTP handlers.
///
/// Constructed explicitly in [`crate::server::run`] (or by the test helpers)
/// and passed into the router, so tests can substitute the store and the
/// picture client.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService>,
    pub pictures: Arc<dyn PictureService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(links: Arc<LinkService>, pictures: Arc<dyn PictureService>) -> Self {
        Self { links, pictures }
    }
}
