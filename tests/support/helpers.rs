// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::Body;
use axum::http::StatusCode;
use serde_json::Value;

use sangbad_core::application::services::ApplicationServices;
use sangbad_core::domain::user::Role;

use super::builders;
use super::memory::{InMemoryArticleRepo, InMemoryCategoryRepo, InMemoryTagRepo, InMemoryUserRepo};
use super::mocks::{self, FixedClock, StaticIdentityResolver};

/// Services wired entirely from inert doubles; used by the router tests
/// that only exercise extraction, authorization and error mapping.
pub fn build_dummy_services() -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::new(mocks::DummyArticleWrite),
        Arc::new(mocks::DummyArticleRead),
        Arc::new(mocks::DummyViewCounter),
        Arc::new(mocks::DummyCategoryRepo),
        Arc::new(mocks::DummyTagRepo),
        Arc::new(mocks::DummyUserRepo),
        Arc::new(StaticIdentityResolver),
        Arc::new(FixedClock::default()),
    ))
}

/// Services backed by in-memory repositories seeded with one category, two
/// tags and the three role users, sharing a single article store.
pub fn build_memory_services(repo: Arc<InMemoryArticleRepo>) -> Arc<ApplicationServices> {
    let write_repo: Arc<dyn sangbad_core::domain::article::ArticleWriteRepository> =
        repo.clone();
    let read_repo: Arc<dyn sangbad_core::domain::article::ArticleReadRepository> =
        repo.clone();
    let view_counter: Arc<dyn sangbad_core::domain::article::ArticleViewCounter> = repo;
    Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        view_counter,
        Arc::new(InMemoryCategoryRepo::new(vec![
            builders::category(1, "politics"),
            builders::category(2, "technology"),
        ])),
        Arc::new(InMemoryTagRepo::new(vec![
            builders::tag(1, "election"),
            builders::tag(2, "innovation"),
        ])),
        Arc::new(InMemoryUserRepo::new(vec![
            builders::user(1, "admin", Role::Admin),
            builders::user(2, "editor", Role::Editor),
            builders::user(3, "author", Role::Author),
        ])),
        Arc::new(StaticIdentityResolver),
        Arc::new(FixedClock::default()),
    ))
}

pub fn make_test_router() -> axum::Router {
    let state = sangbad_core::presentation::http::state::HttpState {
        services: build_dummy_services(),
    };
    sangbad_core::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

pub fn make_memory_router(repo: Arc<InMemoryArticleRepo>) -> axum::Router {
    let state = sangbad_core::presentation::http::state::HttpState {
        services: build_memory_services(repo),
    };
    sangbad_core::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

pub async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn assert_error_response(
    response: axum::response::Response,
    expected: StatusCode,
    expected_error: &str,
) {
    assert_eq!(response.status(), expected);
    let body = read_json(response).await;
    assert_eq!(body["error"], expected_error);
}

pub fn json_request(
    method: axum::http::Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> axum::http::Request<Body> {
    let mut builder = axum::http::Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(axum::http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(value) => builder
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
