//! Domain layer containing business entities and contracts.
//!
//! Defines the [`entities`] stored by the service and the [`repositories`]
//! traits implemented by the infrastructure layer. The domain layer has no
//! dependencies on infrastructure or presentation concerns.

pub mod entities;
pub mod repositories;
