mod support;

use axum::http::{HeaderValue, Method, StatusCode, header};
use reel_server::{Config, ServeArgs};
use serde_json::{Value, json};
use support::{build_test_app, build_test_app_with, origin, valid_movie};

#[tokio::test]
async fn requests_without_origin_are_allowed() {
    let app = build_test_app();

    let response = app.server.get("/movies").await;

    response.assert_status_ok();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn allowed_origin_is_echoed_back() {
    let app = build_test_app();
    let (name, value) = origin("http://localhost:8080");

    let response = app.server.get("/movies").add_header(name, value).await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:8080"))
    );
}

#[tokio::test]
async fn every_default_origin_passes() {
    let app = build_test_app();

    for allowed in [
        "http://localhost:8080",
        "http://localhost:1234",
        "http://127.0.0.1:5500",
        "http://movies.com",
    ] {
        let (name, value) = origin(allowed);
        let response = app.server.get("/").add_header(name, value).await;
        response.assert_status_ok();
    }
}

#[tokio::test]
async fn foreign_origin_is_rejected_before_handlers() {
    let app = build_test_app();
    let before = app.movie_count();
    let (name, value) = origin("http://evil.example");

    let response = app
        .server
        .post("/movies")
        .add_header(name, value)
        .json(&valid_movie())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Not allowed by CORS" })
    );
    assert_eq!(app.movie_count(), before);
}

#[tokio::test]
async fn foreign_origin_cannot_read_either() {
    let app = build_test_app();
    let (name, value) = origin("http://movies.com.evil.example");

    let response = app.server.get("/movies").add_header(name, value).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn preflight_from_allowed_origin_lists_patch() {
    let app = build_test_app();
    let (name, value) = origin("http://movies.com");

    let response = app
        .server
        .method(Method::OPTIONS, "/movies/dcdd0fad-a94c-4810-8acc-5f108d3b18c3")
        .add_header(name, value)
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("PATCH"),
        )
        .await;

    response.assert_status_ok();
    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(methods.contains("PATCH"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn preflight_from_foreign_origin_is_rejected() {
    let app = build_test_app();
    let (name, value) = origin("http://evil.example");

    let response = app
        .server
        .method(Method::OPTIONS, "/movies")
        .add_header(name, value)
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("DELETE"),
        )
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn configured_allow_list_replaces_defaults() {
    let args = ServeArgs {
        allowed_origins: vec!["https://reel.example".into()],
        ..ServeArgs::default()
    };
    let app = build_test_app_with(Config::from_args(&args).unwrap());

    let (name, value) = origin("https://reel.example");
    app.server
        .get("/")
        .add_header(name, value)
        .await
        .assert_status_ok();

    let (name, value) = origin("http://movies.com");
    app.server
        .get("/")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}
