//! JSON File Store Tests
//!
//! Runs the router over `JsonFilePostRepository` and checks that
//! writes made through HTTP survive reopening the store.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use postdrive::cli::{open_store, seed_store, StoreConfig};
use postdrive::http_server::{HttpServer, HttpServerConfig};
use postdrive::repository::{JsonFilePostRepository, PostRepository};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn router_over(repo: Arc<dyn PostRepository>) -> Router {
    HttpServer::with_config(HttpServerConfig::default(), repo).router()
}

async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Create, update and delete through HTTP, then reopen the file.
#[tokio::test]
async fn test_http_writes_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("posts.json");

    {
        let repo = Arc::new(JsonFilePostRepository::open(&path).unwrap());
        let router = router_over(repo);

        for id in 1..=3 {
            let (status, _) = send(
                router.clone(),
                Method::POST,
                "/api/posts",
                Some(json!({"id": id, "userId": 1, "title": "t", "body": "b", "version": null})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, _) = send(
            router.clone(),
            Method::PUT,
            "/api/posts/2",
            Some(json!({"id": 2, "userId": 1, "title": "edited", "body": "b", "version": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);

        let (status, _) = send(router, Method::DELETE, "/api/posts/3", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let router = router_over(Arc::new(JsonFilePostRepository::open(&path).unwrap()));
    let (status, body) = send(router, Method::GET, "/api/posts", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "userId": 1, "title": "t", "body": "b", "version": null},
            {"id": 2, "userId": 1, "title": "edited", "body": "b", "version": 1}
        ])
    );
}

/// Seeding a fresh file store makes the seed visible over HTTP.
#[tokio::test]
async fn test_seeded_file_store_serves_posts() {
    let temp = TempDir::new().unwrap();
    let seed = temp.path().join("seed.json");
    std::fs::write(
        &seed,
        r#"[{"id": 1, "userId": 1, "title": "Hello", "body": "Welcome"}]"#,
    )
    .unwrap();

    let store = StoreConfig::File {
        path: temp.path().join("posts.json"),
    };
    let repo = open_store(&store).unwrap();
    assert_eq!(seed_store(repo.as_ref(), &seed).unwrap(), 1);

    let (status, body) = send(router_over(repo), Method::GET, "/api/posts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Hello");

    // A second boot leaves the populated store alone
    let repo = open_store(&store).unwrap();
    assert_eq!(seed_store(repo.as_ref(), &seed).unwrap(), 0);
}
