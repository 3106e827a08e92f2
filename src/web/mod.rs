//! Web layer: HTML handlers, templates, and middleware.

pub mod handlers;
pub mod middleware;
