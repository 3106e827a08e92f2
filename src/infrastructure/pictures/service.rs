//! Picture service trait.

use async_trait::async_trait;

/// Trait for fetching a decorative picture URL for the result page.
///
/// Strictly best-effort: implementations must swallow their own failures and
/// return `None`, because the absence of a picture is a valid, silent outcome
/// that never fails the surrounding request.
///
/// # Implementations
///
/// - [`crate::infrastructure::pictures::CatApiClient`] - TheCatAPI-backed client
/// - [`crate::infrastructure::pictures::NullPictures`] - No-op implementation
#[async_trait]
pub trait PictureService: Send + Sync {
    /// Returns the URL of a random picture, or `None` when none is available.
    async fn random_picture(&self) -> Option<String>;
}
