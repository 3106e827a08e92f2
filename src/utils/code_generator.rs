//! Short code generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates a random short code of the given length.
///
/// Characters are drawn uniformly from the 62-character alphanumeric
/// alphabet (upper and lower case letters plus digits) using the
/// process-wide thread RNG.
///
/// No uniqueness guarantee is built in; the caller checks existence
/// against the store before using a code.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
