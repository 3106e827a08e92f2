//! Destination URL normalization.

/// Ensures a destination URL carries an HTTP scheme.
///
/// If the input does not begin with `http://` or `https://`, `http://` is
/// prepended exactly once. Nothing else about the URL is altered; stored
/// destinations are compared by plain string equality.
pub fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
