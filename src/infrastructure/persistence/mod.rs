//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//! Queries are runtime-checked (`query_as`) so the crate builds without a
//! live database.

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
