//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer and wraps third-party
//! services.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`pictures`] - Best-effort decorative picture fetching

pub mod persistence;
pub mod pictures;
