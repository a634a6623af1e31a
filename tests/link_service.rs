mod common;

use shorter_url::application::services::LinkService;
use shorter_url::domain::repositories::LinkRepository;
use shorter_url::error::AppError;
use shorter_url::infrastructure::persistence::InMemoryLinkRepository;
use shorter_url::utils::code_generator::RandomCodeGenerator;
use std::collections::HashSet;
use std::sync::Arc;

fn service_with(repo: Arc<InMemoryLinkRepository>, generator: RandomCodeGenerator) -> LinkService {
    LinkService::new(repo, Arc::new(generator), common::BASE_URL, 10)
}

#[tokio::test]
async fn test_codes_are_unique_across_many_links() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = service_with(repo.clone(), RandomCodeGenerator::default());

    let mut codes = HashSet::new();
    for i in 0..500 {
        let link = service
            .create_with_new_code(&format!("https://example.com/{i}"))
            .await
            .unwrap();
        codes.insert(link.short_code);
    }

    assert_eq!(codes.len(), 500);
    assert_eq!(repo.count().await.unwrap(), 500);
}

#[tokio::test]
async fn test_small_code_space_fills_up_then_exhausts() {
    // Two possible codes: "a" and "b".
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = LinkService::new(
        repo.clone(),
        Arc::new(RandomCodeGenerator::with_alphabet(1, b"ab")),
        common::BASE_URL,
        200,
    );

    let first = service.create_with_new_code("https://one.example/").await.unwrap();
    let second = service.create_with_new_code("https://two.example/").await.unwrap();
    assert_ne!(first.short_code, second.short_code);

    let result = service.create_with_new_code("https://three.example/").await;

    assert!(matches!(
        result,
        Err(AppError::CapacityExhausted { attempts: 200 })
    ));
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_concurrent_shorten_of_same_url_yields_one_mapping() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = Arc::new(service_with(repo.clone(), RandomCodeGenerator::default()));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.shorten("https://www.wp.pl/").await })
        })
        .collect();

    let mut codes = HashSet::new();
    let mut created = 0;
    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        if outcome.is_created() {
            created += 1;
        }
        codes.insert(outcome.into_link().short_code);
    }

    assert_eq!(created, 1);
    assert_eq!(codes.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_creation_in_tiny_code_space() {
    // Three codes, three URLs racing for them.
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(
        repo.clone(),
        Arc::new(RandomCodeGenerator::with_alphabet(1, b"xyz")),
        common::BASE_URL,
        1000,
    ));

    let handles: Vec<_> = (0..3)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_with_new_code(&format!("https://example.com/{i}"))
                    .await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap().unwrap().short_code);
    }

    assert_eq!(codes, HashSet::from(["x".to_string(), "y".to_string(), "z".to_string()]));
}

#[tokio::test]
async fn test_round_trip_through_lookup() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = service_with(repo, RandomCodeGenerator::default());

    let created = service
        .shorten("  https://example.com/path?x=1  ")
        .await
        .unwrap()
        .into_link();

    let found = service.find_by_code(&created.short_code).await.unwrap();

    assert_eq!(found.long_url, "https://example.com/path?x=1");
    assert_eq!(found, created);
    assert_eq!(
        service.short_url(&created.short_code),
        format!("http://s.test/{}", created.short_code)
    );
}
