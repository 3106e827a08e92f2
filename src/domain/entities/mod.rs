//! Core business data structures.

pub mod link;

pub use link::{Link, NewLink};
