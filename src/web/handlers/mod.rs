//! HTML handlers rendering the form, result, and redirect flows.

pub mod index;
pub mod redirect;
pub mod shorten;

pub use index::index_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
