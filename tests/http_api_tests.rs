//! HTTP API tests driving the axum router in-process.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use eleven_chat::{build_app, Container, MockChatProvider};

fn app_with(provider: Arc<MockChatProvider>) -> Router {
    build_app(Arc::new(Container::with_provider(provider)))
}

fn chat_request(route: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(route)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(route: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(route)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_chat_returns_provider_answer() {
    let provider = Arc::new(MockChatProvider::replying(
        "You can get a refund within 30 days.",
    ));
    let app = app_with(provider.clone());

    let resp = app
        .oneshot(chat_request(
            "/chat/mistral-large",
            json!({
                "api_key": "k",
                "query": "What is the refund policy?",
                "context": "Refunds within 30 days."
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({"status_code": 200, "response": "You can get a refund within 30 days."})
    );
    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].settings.model(), "mistral-large-latest");
}

#[tokio::test]
async fn test_chat_with_empty_key_is_bad_request() {
    let provider = Arc::new(MockChatProvider::new());
    let app = app_with(provider.clone());

    let resp = app
        .oneshot(chat_request(
            "/chat/mistral-large",
            json!({"api_key": "", "query": "x", "context": "y"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("MISTRAL_API_KEY"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_chat_with_missing_or_null_key_is_bad_request() {
    let provider = Arc::new(MockChatProvider::new());
    let app = app_with(provider.clone());

    for body in [
        json!({"query": "x", "context": "y"}),
        json!({"api_key": null, "query": "x", "context": "y"}),
    ] {
        let resp = app
            .clone()
            .oneshot(chat_request("/chat/mistral-large", body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let detail = json_body(resp).await["detail"].as_str().unwrap().to_string();
        assert!(detail.contains("MISTRAL_API_KEY"));
    }
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_chat_provider_failure_is_server_error() {
    let provider = Arc::new(MockChatProvider::failing("connection reset by peer"));
    let app = app_with(provider);

    let resp = app
        .oneshot(chat_request(
            "/chat/mistral-large",
            json!({"api_key": "k", "query": "x", "context": "y"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await;
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("connection reset by peer"));
}

#[tokio::test]
async fn test_chat_unknown_model_route_is_not_found() {
    let provider = Arc::new(MockChatProvider::new());
    let app = app_with(provider.clone());

    let resp = app
        .oneshot(chat_request(
            "/chat/gpt-4",
            json!({"api_key": "k", "query": "x", "context": "y"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({"detail": "Not Found"}));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_chat_malformed_body_is_rejected_with_detail() {
    let provider = Arc::new(MockChatProvider::new());
    let app = app_with(provider.clone());

    let req = Request::builder()
        .method(Method::POST)
        .uri("/chat/mistral-large")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert!(resp.status().is_client_error());
    assert!(json_body(resp).await["detail"].is_string());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_root_lists_routes() {
    let app = app_with(Arc::new(MockChatProvider::new()));

    let resp = app.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let routes = body.as_object().unwrap();
    assert_eq!(routes.len(), 3);
    assert!(routes.contains_key("/chat/mistral-large"));
    assert!(routes.contains_key("/health"));
    assert!(routes.contains_key("/models"));
}

#[tokio::test]
async fn test_health_is_fixed_after_failed_chat() {
    let app = app_with(Arc::new(MockChatProvider::failing("down")));

    let resp = app
        .clone()
        .oneshot(chat_request(
            "/chat/mistral-large",
            json!({"api_key": "k", "query": "x", "context": "y"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({"status": "the server is running and is healthy"})
    );
}

#[tokio::test]
async fn test_models_is_static() {
    let app = app_with(Arc::new(MockChatProvider::new()));
    let expected = json!({
        "supported_models": ["mistral_large_latest"],
        "default_model": "mistral_large_latest"
    });

    for _ in 0..2 {
        let resp = app.clone().oneshot(get("/models")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, expected);
    }
}
