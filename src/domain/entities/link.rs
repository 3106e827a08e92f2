//! Link entity representing a shortcode-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Maps a short code to its destination URL. For custom entries the `alias`
/// field is present and equal to `code`; generated entries carry no alias.
/// Records are created once and never updated or deleted.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub alias: Option<String>,
    pub destination: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        alias: Option<String>,
        destination: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            alias,
            destination,
            created_at,
        }
    }

    /// Returns true if this link was created through the custom-alias path.
    pub fn is_aliased(&self) -> bool {
        self.alias.is_some()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub alias: Option<String>,
    pub destination: String,
}

impl NewLink {
    /// A generated entry: random code, no alias.
    pub fn generated(code: String, destination: String) -> Self {
        Self {
            code,
            alias: None,
            destination,
        }
    }

    /// A custom entry: the alias doubles as the code.
    pub fn aliased(alias: String, destination: String) -> Self {
        Self {
            code: alias.clone(),
            alias: Some(alias),
            destination,
        }
    }
}
