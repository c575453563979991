#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use reel_server::{AppState, Config, MovieStore, create_app};
use serde_json::{Value, json};

/// Id of The Shawshank Redemption in the bundled data set.
pub const SEEDED_ID: &str = "dcdd0fad-a94c-4810-8acc-5f108d3b18c3";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    pub fn movie_count(&self) -> usize {
        self.state.store().len()
    }
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(Config::default())
}

pub fn build_test_app_with(config: Config) -> TestApp {
    let store = MovieStore::bundled().expect("bundled data set loads");
    let state = AppState::new(store, config);
    let server =
        TestServer::new(create_app(state.clone())).expect("failed to start test server");

    TestApp { server, state }
}

pub fn origin(value: &'static str) -> (HeaderName, HeaderValue) {
    (header::ORIGIN, HeaderValue::from_static(value))
}

pub fn valid_movie() -> Value {
    json!({
        "title": "X",
        "year": 2020,
        "director": "Y",
        "duration": 100,
        "poster": "http://a.com/p.jpg",
        "genre": ["Drama"]
    })
}
