#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use shortcat::application::services::LinkService;
use shortcat::domain::entities::{Link, NewLink};
use shortcat::domain::repositories::LinkRepository;
use shortcat::error::AppError;
use shortcat::infrastructure::pictures::PictureService;
use shortcat::state::AppState;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "http://sh.test/";

/// In-memory link store so handler tests run without a database.
///
/// Mirrors the Postgres repository's contract: no duplicate checking, first
/// match wins for lookups.
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of every stored record, in insertion order.
    pub fn all(&self) -> Vec<Link> {
        self.links.lock().unwrap().clone()
    }

    /// Inserts a record directly, bypassing the service.
    pub fn seed(&self, code: &str, alias: Option<&str>, destination: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.links.lock().unwrap().push(Link::new(
            id,
            code.to_string(),
            alias.map(str::to_string),
            destination.to_string(),
            Utc::now(),
        ));
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code_or_alias(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|link| link.code == code || link.alias.as_deref() == Some(code))
            .cloned())
    }

    async fn find_by_destination(&self, destination: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|link| link.destination == destination)
            .cloned())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let link = Link::new(
            id,
            new_link.code,
            new_link.alias,
            new_link.destination,
            Utc::now(),
        );
        self.links.lock().unwrap().push(link.clone());
        Ok(link)
    }
}

/// Picture service returning a fixed URL, or nothing.
pub struct StubPictures(pub Option<String>);

#[async_trait]
impl PictureService for StubPictures {
    async fn random_picture(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Builds an [`AppState`] over the given in-memory store with a 6-character
/// code length and a stubbed picture.
pub fn create_test_state(repo: Arc<InMemoryLinkRepository>) -> AppState {
    let links = Arc::new(LinkService::new(repo, 6, TEST_BASE_URL.to_string()));
    let pictures = Arc::new(StubPictures(Some(
        "https://pictures.test/cat.jpg".to_string(),
    )));

    AppState::new(links, pictures)
}
