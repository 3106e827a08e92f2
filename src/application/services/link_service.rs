//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_norm::ensure_scheme;

/// Upper bound on random code generation attempts.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service orchestrating the shorten and redirect flows.
///
/// Handles URL scheme normalization, alias availability checks, destination
/// reuse, and code generation. Uniqueness is enforced only by the existence
/// check performed here before each insert; two concurrent requests can both
/// pass the check and both insert. That race is an accepted property of the
/// flow, the store performs no additional locking.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    code_length: usize,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>, code_length: usize, base_url: String) -> Self {
        Self {
            links,
            code_length,
            base_url,
        }
    }

    /// Shortens a destination URL, optionally under a custom alias.
    ///
    /// # Flow
    ///
    /// 1. If the URL lacks an `http://`/`https://` prefix, `http://` is
    ///    prepended.
    /// 2. With an alias: the alias must be free in the shared code/alias
    ///    namespace, then a record with `code = alias` is inserted.
    /// 3. Without an alias: an existing record for the exact destination is
    ///    reused; otherwise a fresh random code is generated and inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] if the requested alias already exists
    /// as either a code or an alias. Returns [`AppError::CodeSpaceExhausted`]
    /// after too many generation collisions, and
    /// [`AppError::StoreUnavailable`] on database errors.
    pub async fn shorten(&self, url: &str, alias: Option<String>) -> Result<Link, AppError> {
        let destination = ensure_scheme(url);

        if let Some(alias) = alias {
            if self.links.find_by_code_or_alias(&alias).await?.is_some() {
                return Err(AppError::AliasTaken { alias });
            }

            return self.links.insert(NewLink::aliased(alias, destination)).await;
        }

        if let Some(existing) = self.links.find_by_destination(&destination).await? {
            return Ok(existing);
        }

        let code = self.generate_unique_code().await?;
        self.links
            .insert(NewLink::generated(code, destination))
            .await
    }

    /// Resolves a code or alias to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.links
            .find_by_code_or_alias(code)
            .await?
            .ok_or_else(|| AppError::NotFound {
                code: code.to_string(),
            })
    }

    /// Constructs the full short URL presented on the result page.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Generates a random code that is currently unused, retrying a bounded
    /// number of times on collision.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(self.code_length);

            if self.links.find_by_code_or_alias(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::CodeSpaceExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;
    use mockall::Sequence;

    fn make_link(id: i64, code: &str, alias: Option<&str>, destination: &str) -> Link {
        Link::new(
            id,
            code.to_string(),
            alias.map(str::to_string),
            destination.to_string(),
            Utc::now(),
        )
    }

    fn service(mock: MockLinkRepository) -> LinkService {
        LinkService::new(Arc::new(mock), 6, "http://localhost:3000/".to_string())
    }

    #[tokio::test]
    async fn test_shorten_generates_code() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_destination()
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_find_by_code_or_alias()
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_insert()
            .withf(|new_link| {
                new_link.alias.is_none()
                    && new_link.code.len() == 6
                    && new_link.code.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|new_link| Ok(make_link(1, &new_link.code, None, &new_link.destination)));

        let result = service(mock).shorten("https://example.com", None).await;

        let link = result.unwrap();
        assert_eq!(link.destination, "https://example.com");
        assert!(!link.is_aliased());
    }

    #[tokio::test]
    async fn test_shorten_prepends_scheme() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_destination()
            .withf(|destination| destination == "http://example.com")
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_find_by_code_or_alias()
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_insert()
            .withf(|new_link| new_link.destination == "http://example.com")
            .times(1)
            .returning(|new_link| Ok(make_link(1, &new_link.code, None, &new_link.destination)));

        let result = service(mock).shorten("example.com", None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_reuses_existing_destination() {
        let mut mock = MockLinkRepository::new();

        let existing = make_link(5, "old123", None, "https://example.com");
        mock.expect_find_by_destination()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock.expect_insert().times(0);

        let result = service(mock).shorten("https://example.com", None).await;

        let link = result.unwrap();
        assert_eq!(link.id, 5);
        assert_eq!(link.code, "old123");
    }

    #[tokio::test]
    async fn test_shorten_with_alias_stores_alias_as_code() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code_or_alias()
            .withf(|candidate| candidate == "myalias")
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_find_by_destination().times(0);
        mock.expect_insert()
            .withf(|new_link| {
                new_link.code == "myalias" && new_link.alias.as_deref() == Some("myalias")
            })
            .times(1)
            .returning(|new_link| {
                Ok(make_link(
                    1,
                    &new_link.code,
                    new_link.alias.as_deref(),
                    &new_link.destination,
                ))
            });

        let result = service(mock)
            .shorten("https://example.com", Some("myalias".to_string()))
            .await;

        let link = result.unwrap();
        assert_eq!(link.code, "myalias");
        assert!(link.is_aliased());
    }

    #[tokio::test]
    async fn test_shorten_alias_taken() {
        let mut mock = MockLinkRepository::new();

        let existing = make_link(5, "taken", Some("taken"), "https://other.com");
        mock.expect_find_by_code_or_alias()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock.expect_insert().times(0);

        let result = service(mock)
            .shorten("https://example.com", Some("taken".to_string()))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::AliasTaken { alias } if alias == "taken"
        ));
    }

    #[tokio::test]
    async fn test_shorten_alias_conflicts_with_generated_code() {
        let mut mock = MockLinkRepository::new();

        // Codes and aliases share a namespace: a generated code blocks the
        // same string from being claimed as an alias later.
        let existing = make_link(5, "abc123", None, "https://other.com");
        mock.expect_find_by_code_or_alias()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock.expect_insert().times(0);

        let result = service(mock)
            .shorten("https://example.com", Some("abc123".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::AliasTaken { .. }));
    }

    #[tokio::test]
    async fn test_shorten_retries_on_code_collision() {
        let mut mock = MockLinkRepository::new();
        let mut seq = Sequence::new();

        mock.expect_find_by_destination()
            .times(1)
            .returning(|_| Ok(None));

        let collided = make_link(3, "dup", None, "https://elsewhere.com");
        mock.expect_find_by_code_or_alias()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(collided.clone())));
        mock.expect_find_by_code_or_alias()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        mock.expect_insert()
            .times(1)
            .returning(|new_link| Ok(make_link(1, &new_link.code, None, &new_link.destination)));

        let result = service(mock).shorten("https://example.com", None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_too_many_collisions() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_destination()
            .times(1)
            .returning(|_| Ok(None));

        let collided = make_link(3, "dup", None, "https://elsewhere.com");
        mock.expect_find_by_code_or_alias()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(move |_| Ok(Some(collided.clone())));
        mock.expect_insert().times(0);

        let result = service(mock).shorten("https://example.com", None).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::CodeSpaceExhausted { .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock = MockLinkRepository::new();

        let stored = make_link(1, "abc123", None, "https://example.com");
        mock.expect_find_by_code_or_alias()
            .withf(|candidate| candidate == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let link = service(mock).resolve("abc123").await.unwrap();
        assert_eq!(link.destination, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_miss() {
        let mut mock = MockLinkRepository::new();

        mock.expect_find_by_code_or_alias()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock).resolve("nosuch").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::NotFound { code } if code == "nosuch"
        ));
    }

    #[tokio::test]
    async fn test_short_url_joins_base_and_code() {
        let mock = MockLinkRepository::new();
        let service = service(mock);

        assert_eq!(service.short_url("abc123"), "http://localhost:3000/abc123");
    }
}
