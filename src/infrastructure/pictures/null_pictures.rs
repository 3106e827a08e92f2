//! No-op picture implementation for testing or disabled fetching.

use async_trait::async_trait;
use tracing::debug;

use super::service::PictureService;

/// A picture service that never returns a picture.
///
/// Used in tests and as a fallback when the HTTP client cannot be built at
/// startup. Pages render without an image, which is a valid outcome.
pub struct NullPictures;

impl NullPictures {
    /// Creates a new NullPictures instance.
    pub fn new() -> Self {
        debug!("Using NullPictures (picture fetching disabled)");
        Self
    }
}

impl Default for NullPictures {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PictureService for NullPictures {
    async fn random_picture(&self) -> Option<String> {
        None
    }
}
