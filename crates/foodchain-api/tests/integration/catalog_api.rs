//! The read-only ecosystem lookup endpoint and health probe.

use http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_forest_chain_ends_with_apex_predator() {
    let mut app = TestApp::new().await;
    let resp = app.get("/api/ecosystem/Forest").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let chain = body_json(resp).await;
    let chain = chain.as_array().unwrap();
    assert_eq!(chain.len(), 5);
    assert_eq!(chain[0]["name"], "Grass");
    assert_eq!(chain[4]["role"], "Apex Predator");
}

#[tokio::test]
async fn test_unknown_ecosystem_is_empty_object() {
    let mut app = TestApp::new().await;
    let resp = app.get("/api/ecosystem/Nonexistent").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({}));
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let mut app = TestApp::new().await;
    let resp = app.get("/api/ecosystem/ocean").await;
    assert_eq!(body_json(resp).await, serde_json::json!({}));
}

#[tokio::test]
async fn test_lookup_needs_no_session() {
    let mut app = TestApp::new().await;
    let resp = app.get("/api/ecosystem/Ocean").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let mut app = TestApp::new().await;
    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let health = body_json(resp).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["name"], "foodchain-api");
}
