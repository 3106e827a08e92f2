//! Best-effort decorative picture fetching.
//!
//! Provides a [`PictureService`] trait with two implementations:
//! - [`CatApiClient`] - Production client calling TheCatAPI
//! - [`NullPictures`] - No-op implementation for testing/disabled fetching

mod cat_api;
mod null_pictures;
mod service;

pub use cat_api::CatApiClient;
pub use null_pictures::NullPictures;
pub use service::PictureService;
