//! Test harness driving the router in-process.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use textsum_core::kernel::{ServerDeps, TestDependencies};
use textsum_core::server::build_app;
use textsum_core::Config;
use tower::ServiceExt;

/// Router plus handles on the mocks behind it
pub struct TestHarness {
    pub app: Router,
    pub deps: TestDependencies,
}

impl TestHarness {
    /// Default config with mock summarizers
    pub fn new() -> Self {
        Self::with(Config::default(), TestDependencies::new())
    }

    pub fn with(config: Config, deps: TestDependencies) -> Self {
        // Uses try_init() to avoid panicking if already initialized.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let app = build_app(config, deps.server_deps());
        Self { app, deps }
    }

    /// Router backed by the real extractive summarizer and scorer
    pub fn with_real_backends(config: Config) -> Router {
        build_app(config.clone(), ServerDeps::from_config(&config))
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body can be read")
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}
