#![allow(dead_code)]

use std::sync::Arc;

use shorter_url::application::services::LinkService;
use shorter_url::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use shorter_url::domain::entities::{NewShortenedLink, ShortenedLink};
use shorter_url::domain::repositories::LinkRepository;
use shorter_url::infrastructure::cache::NullCache;
use shorter_url::infrastructure::persistence::InMemoryLinkRepository;
use shorter_url::state::AppState;
use shorter_url::utils::code_generator::RandomCodeGenerator;

pub const BASE_URL: &str = "http://s.test";

/// Builds an application state backed by in-memory storage and no cache.
///
/// The repository is returned as well so tests can inspect stored rows.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());

    let link_service = Arc::new(LinkService::new(
        repo.clone(),
        Arc::new(RandomCodeGenerator::default()),
        BASE_URL,
        DEFAULT_MAX_ATTEMPTS,
    ));

    let state = AppState::new(link_service, Arc::new(NullCache::new()));

    (state, repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> ShortenedLink {
    repo.insert(NewShortenedLink {
        long_url: url.to_string(),
        short_code: code.to_string(),
    })
    .await
    .unwrap()
}
