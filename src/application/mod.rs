//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating repository calls and
//! business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - Shorten and redirect flows

pub mod services;
