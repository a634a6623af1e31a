mod common;

use axum::body::Bytes;
use axum_test::TestServer;
use shorter_url::domain::repositories::LinkRepository;
use shorter_url::infrastructure::persistence::InMemoryLinkRepository;
use std::collections::HashMap;
use std::sync::Arc;

fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = common::create_test_state();
    let app = shorter_url::web::routes::routes().with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

fn form(long_url: &str) -> HashMap<&'static str, String> {
    HashMap::from([("long_url", long_url.to_string())])
}

#[tokio::test]
async fn test_create_page_renders_form() {
    let (server, _repo) = make_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<form method=\"post\""));
    assert!(html.contains("name=\"long_url\""));
}

#[tokio::test]
async fn test_create_submit_stores_url() {
    let (server, repo) = make_server();

    let response = server.post("/").form(&form("https://www.wp.pl/")).await;

    response.assert_status_ok();
    assert_eq!(repo.count().await.unwrap(), 1);

    let link = repo
        .find_by_long_url("https://www.wp.pl/")
        .await
        .unwrap()
        .unwrap();

    let html = response.text();
    assert!(html.contains("Short link created"));
    assert!(html.contains("id=\"short-url\""));
    assert!(html.contains(&link.short_code));
}

#[tokio::test]
async fn test_create_submit_twice_keeps_code() {
    let (server, repo) = make_server();

    server
        .post("/")
        .form(&form("https://www.wp.pl/"))
        .await
        .assert_status_ok();
    let first = repo
        .find_by_long_url("https://www.wp.pl/")
        .await
        .unwrap()
        .unwrap();

    let response = server.post("/").form(&form("https://www.wp.pl/")).await;

    response.assert_status_ok();
    assert_eq!(repo.count().await.unwrap(), 1);

    let html = response.text();
    assert!(html.contains("Short link already exists"));
    assert!(html.contains(&first.short_code));
}

#[tokio::test]
async fn test_create_submit_without_url() {
    let (server, repo) = make_server();

    let response = server
        .post("/")
        .form(&HashMap::<&str, String>::new())
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("class=\"errors\""));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_submit_without_body() {
    let (server, repo) = make_server();

    let response = server.post("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("class=\"errors\""));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_submit_multipart_without_url() {
    let (server, repo) = make_server();

    let response = server
        .post("/")
        .bytes(Bytes::from_static(b"--x--\r\n"))
        .content_type("multipart/form-data; boundary=x")
        .await;

    response.assert_status_ok();
    assert!(!response.text().contains("id=\"short-url\""));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_submit_invalid_url() {
    let (server, repo) = make_server();

    let response = server.post("/").form(&form("INVALID-URL")).await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("class=\"errors\""));
    assert!(html.contains("value=\"INVALID-URL\""));
    assert!(!html.contains("id=\"short-url\""));
    assert_eq!(repo.count().await.unwrap(), 0);
}
