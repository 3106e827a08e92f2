//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_norm`] - Destination URL scheme normalization

pub mod code_generator;
pub mod url_norm;
