// tests/e2e_workflow.rs
//
// Drives the full editorial path over the HTTP surface: draft creation,
// a failed publish on incomplete translations, completion, publication,
// public visibility and deletion.
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use tower::util::ServiceExt as _;

mod support;

use support::memory::InMemoryArticleRepo;
use support::{ADMIN_TOKEN, EDITOR_TOKEN, json_request, make_memory_router, read_json};

fn draft_body() -> serde_json::Value {
    serde_json::json!({
        "title": {"en": "Budget Session", "bn": "বাজেট অধিবেশন"},
        "slug": "budget-session",
        "excerpt": {"en": "Parliament opens", "bn": ""},
        "content": {"en": "Full coverage", "bn": "সম্পূর্ণ প্রতিবেদন"},
        "category": 1,
        "tags": [1]
    })
}

#[tokio::test]
async fn editorial_workflow_end_to_end() {
    let repo = Arc::new(InMemoryArticleRepo::new(vec![]));
    let app = make_memory_router(Arc::clone(&repo));

    // Editor drafts the piece; the Bengali excerpt is still missing.
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/articles",
            Some(EDITOR_TOKEN),
            Some(draft_body()),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created = read_json(resp).await;
    assert_eq!(created["status"], "draft");
    assert_eq!(created["category"]["slug"], "politics");
    let id = created["id"].as_i64().unwrap();

    // Not publicly visible yet.
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::GET,
            "/api/v1/articles/by-slug/budget-session",
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Publishing with the missing translation fails and names the field.
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/articles/{id}/status"),
            Some(EDITOR_TOKEN),
            Some(serde_json::json!({"status": "published"})),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("excerpt.bn"));
    assert_eq!(repo.get(id).unwrap().status.as_str(), "draft");

    // Completing the excerpt and publishing in one update succeeds.
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/articles/{id}"),
            Some(EDITOR_TOKEN),
            Some(serde_json::json!({
                "excerpt": {"en": "Parliament opens", "bn": "সংসদ শুরু"},
                "status": "published"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let published = read_json(resp).await;
    assert_eq!(published["status"], "published");
    assert!(published["published_at"].is_string());

    // Now the public sees it, and the read bumps the view counter.
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::GET,
            "/api/v1/articles/by-slug/budget-session",
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let seen = read_json(resp).await;
    assert_eq!(seen["tags"][0]["slug"], "election");
    assert_eq!(repo.get(id).unwrap().views, 1);

    // A second article may not reuse the slug.
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/articles",
            Some(EDITOR_TOKEN),
            Some(draft_body()),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Admin removes the piece; it is gone for everyone.
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::DELETE,
            &format!("/api/v1/articles/{id}"),
            Some(ADMIN_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(json_request(
            Method::GET,
            &format!("/api/v1/articles/{id}"),
            Some(ADMIN_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
