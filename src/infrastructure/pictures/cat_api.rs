//! TheCatAPI-backed picture client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use super::service::PictureService;

/// Search endpoint returning a JSON array of random images.
const CAT_API_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// Upper bound on the external call so a slow third party cannot hold a
/// shorten request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct CatImage {
    url: String,
}

/// Picture client backed by TheCatAPI.
///
/// Failures at any stage (connect, non-success status, body shape) are
/// logged at WARN and reported as "no picture".
pub struct CatApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatApiClient {
    /// Creates a client with the default endpoint and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: CAT_API_URL.to_string(),
        })
    }

    async fn fetch(&self) -> Result<Option<String>, reqwest::Error> {
        let images: Vec<CatImage> = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(images.into_iter().next().map(|image| image.url))
    }
}

#[async_trait]
impl PictureService for CatApiClient {
    async fn random_picture(&self) -> Option<String> {
        match self.fetch().await {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "picture fetch failed, rendering without one");
                None
            }
        }
    }
}
