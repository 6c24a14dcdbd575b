mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use snaplink::routes::app_router;
use snaplink::utils::code_generator::{CODE_LENGTH, is_generated_shape};
use std::future::IntoFuture;
use tower::ServiceExt;

#[tokio::test]
async fn test_shorten_generates_code() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/shorten")
        .add_header("Referer", "http://localhost:3000/")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["shortCode"].as_str().unwrap();

    assert_eq!(code.len(), CODE_LENGTH);
    assert!(is_generated_shape(code));
    assert_eq!(json["shortUrl"], format!("http://localhost:3000/{code}"));
    assert_eq!(common::count_links(&pool).await, 1);
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let code = response.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string();

    let redirect = server.get(&format!("/{code}")).await;

    assert_eq!(redirect.status_code(), StatusCode::FOUND);
    assert_eq!(redirect.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/shorten")
        .add_header("Referer", "https://app.example")
        .json(&json!({ "longUrl": "https://example.com", "customCode": "promo" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortCode"], "promo");
    assert_eq!(json["shortUrl"], "https://app.example/promo");
}

#[tokio::test]
async fn test_shorten_without_referer_returns_bare_code() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://example.com", "customCode": "bare" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["shortUrl"], "bare");
}

#[tokio::test]
async fn test_shorten_custom_code_conflict() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://first.com", "customCode": "taken" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://second.com", "customCode": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "conflict");
    assert!(json["error"].is_string());

    assert_eq!(common::count_links(&pool).await, 1);

    let redirect = server.get("/taken").await;
    assert_eq!(redirect.header("location"), "https://first.com");
}

#[tokio::test]
async fn test_shorten_missing_long_url() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "customCode": "orphan" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "validation_error");
    assert_eq!(json["error"], "longUrl is required");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_shorten_empty_long_url() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/shorten")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "validation_error"
    );
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_shorten_url_not_syntax_checked() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "longUrl": "not a url at all", "customCode": "odd" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_concurrent_shorten_same_custom_code() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    let request = |i: u32| {
        server
            .post("/shorten")
            .json(&json!({ "longUrl": format!("https://example.com/{i}"), "customCode": "hot" }))
            .into_future()
    };

    let (a, b, c, d) = tokio::join!(request(1), request(2), request(3), request(4));
    let statuses = [a, b, c, d].map(|r| r.status_code());

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 3);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_shorten_same_custom_code_across_connections() {
    let (pool, _dir) = common::create_file_test_pool(8).await;
    let app = app_router(common::create_test_state(pool.clone()));

    let mut handles = Vec::new();
    for i in 0..16 {
        let app = app.clone();
        let body = json!({ "longUrl": format!("https://example.com/{i}"), "customCode": "hot" });
        let request = Request::post("/shorten")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        handles.push(tokio::spawn(app.oneshot(request)));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap().status() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status: {other}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[tokio::test]
async fn test_shorten_store_failure() {
    let pool = common::create_test_pool().await;
    sqlx::query("DROP TABLE links").execute(&pool).await.unwrap();
    let server = common::create_test_server(pool);

    let generated = server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;
    let custom = server
        .post("/shorten")
        .json(&json!({ "longUrl": "https://example.com", "customCode": "down" }))
        .await;

    for response in [generated, custom] {
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.text();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "internal_error");
        assert_eq!(json["error"], "Database error");
        assert!(!body.contains("no such table"));
        assert!(!body.to_lowercase().contains("sqlite"));
    }
}
