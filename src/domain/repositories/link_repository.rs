//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// A plain associative store with no transactional guarantees: duplicate
/// checking is the caller's responsibility, and the read-then-write sequence
/// in the shorten flow is deliberately unsynchronized (see the service docs).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds the first link whose `code` or `alias` equals the given value.
    ///
    /// Codes and aliases share one namespace for lookup purposes: a path
    /// segment matches a record if it equals either field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_code_or_alias(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link whose destination equals the given URL exactly.
    ///
    /// Plain string equality, no normalization. Used for URL reuse: the same
    /// destination always resolves to the same previously generated code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_destination(&self, destination: &str) -> Result<Option<Link>, AppError>;

    /// Persists a new link unconditionally.
    ///
    /// No duplicate check is performed here; the service checks existence
    /// before inserting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;
}
