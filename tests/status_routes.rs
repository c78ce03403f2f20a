use axum::{
    Router,
    body::{self, Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::json;
use tower::ServiceExt;

use api_ok::{routes::ROOT_PATH, test_helpers::test_app};

const API_OK_BODY: &[u8] = br#"{"message":"API OK"}"#;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn root_returns_api_ok() {
    let (status, headers, body) = send(test_app(ROOT_PATH), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(&body[..], API_OK_BODY);

    let parsed: serde_json::Value = serde_json::from_slice(&body).expect("body should be json");
    assert_eq!(parsed, json!({ "message": "API OK" }));
}

#[tokio::test]
async fn query_string_is_ignored() {
    let (status, _, body) = send(test_app(ROOT_PATH), get("/?foo=bar")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], API_OK_BODY);
}

#[tokio::test]
async fn headers_and_body_are_ignored() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/?page=2&sort=desc")
        .header(header::ACCEPT, "text/html")
        .header(header::AUTHORIZATION, "Bearer not-checked")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-request-id", "abc-123")
        .body(Body::from(json!({ "message": "something else" }).to_string()))
        .unwrap();

    let (status, _, body) = send(test_app(ROOT_PATH), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], API_OK_BODY);
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let app = test_app(ROOT_PATH);
    let (_, _, first) = send(app.clone(), get("/")).await;

    for uri in ["/", "/?foo=bar", "/?a=1&b=2"] {
        let (status, _, body) = send(app.clone(), get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, first, "{uri}");
    }
}

#[tokio::test]
async fn head_root_is_served_without_body() {
    let request = Request::builder()
        .method(Method::HEAD)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(test_app(ROOT_PATH), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn post_root_is_not_routed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let (status, headers, body) = send(test_app(ROOT_PATH), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let allow = headers[header::ALLOW].to_str().unwrap();
    assert!(allow.contains("GET"), "{allow}");

    let json: serde_json::Value = serde_json::from_slice(&body).expect("body should be json");
    assert_eq!(json, json!({ "status": 405, "message": "Method Not Allowed" }));
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let (status, headers, body) = send(test_app(ROOT_PATH), get("/missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body should be json");
    assert_eq!(json, json!({ "status": 404, "message": "Not Found" }));
}

#[tokio::test]
async fn mounted_under_base_path() {
    let app = test_app("/api");

    let (status, _, body) = send(app.clone(), get("/api")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], API_OK_BODY);

    let (status, _, _) = send(app, get("/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
