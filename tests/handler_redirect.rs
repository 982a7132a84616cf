mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use std::time::Duration;
use shorty::api::handlers::{redirect_handler, shorten_handler};

fn redirect_server(state: shorty::AppState) -> TestServer {
    let app = Router::new()
        .route("/{id}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, links, _quotas) = common::create_test_state(10);
    links.seed(
        "abc123",
        "https://example.com/target",
        Duration::from_secs(3600),
    );

    let server = redirect_server(state);

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_increments_visit_counter() {
    let (state, links, quotas) = common::create_test_state(10);
    links.seed("counted", "https://example.com/", Duration::from_secs(3600));

    let server = redirect_server(state);

    let first = server.get("/counted").await;
    assert_eq!(first.status_code(), 301);
    assert_eq!(quotas.value_of("counter").as_deref(), Some("1"));

    let second = server.get("/counted").await;
    assert_eq!(second.status_code(), 301);
    assert_eq!(quotas.value_of("counter").as_deref(), Some("2"));
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _links, quotas) = common::create_test_state(10);
    let server = redirect_server(state);

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");

    // A miss does not touch the counter.
    assert_eq!(quotas.value_of("counter"), None);
}

#[tokio::test]
async fn test_expired_mapping_is_not_found() {
    let (state, links, _quotas) = common::create_test_state(10);
    links.seed("gone", "https://example.com/", Duration::from_secs(3600));
    links.expire_now("gone");

    let server = redirect_server(state);

    server.get("/gone").await.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_then_resolve_round_trip() {
    let (state, _links, _quotas) = common::create_test_state(10);
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .route("/{id}", get(redirect_handler))
        .layer(common::MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let shorten = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "http://example.com/page?x=1" }))
        .await;
    shorten.assert_status_ok();

    let json = shorten.json::<serde_json::Value>();
    let short = json["short"].as_str().unwrap();
    let id = short.rsplit_once('/').unwrap().1;

    let redirect = server.get(&format!("/{}", id)).await;

    assert_eq!(redirect.status_code(), 301);
    // Redirect target is the normalized, https-forced input URL.
    assert_eq!(
        redirect.header("location"),
        "https://example.com/page?x=1"
    );
}
