//! Registration, login, gating, and logout over HTTP.

use foodchain_api::pages::INVALID_CREDENTIALS;
use foodchain_api::AppConfig;
use http::StatusCode;

use crate::common::{body_json, body_string, location, TestApp};

#[tokio::test]
async fn test_welcome_page_has_registration_form() {
    let mut app = TestApp::new().await;
    let resp = app.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"action="/register""#));
}

#[tokio::test]
async fn test_register_login_visualize_end_to_end() {
    let mut app = TestApp::new().await;

    let resp = app.register("Ana", "a@x.com", "pw123").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");

    let resp = app.get("/login").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.login("a@x.com", "pw123").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/visualization");

    let resp = app.get("/visualization").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Welcome, Ana!"));
    assert!(body.contains(r#"<option value="Forest">"#));

    let resp = app.get("/api/ecosystem/Ocean").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let chain = body_json(resp).await;
    let chain = chain.as_array().expect("chain should be a JSON array");
    assert_eq!(chain.len(), 5);
    assert_eq!(
        chain[0],
        serde_json::json!({"name": "Phytoplankton", "role": "Producer"})
    );
}

#[tokio::test]
async fn test_visualization_without_session_redirects_to_login() {
    let mut app = TestApp::new().await;
    let resp = app.get("/visualization").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");
    let body = body_string(resp).await;
    assert!(!body.contains("Phytoplankton"));
}

#[tokio::test]
async fn test_wrong_password_shows_inline_error() {
    let mut app = TestApp::new().await;
    app.register("Ana", "a@x.com", "pw123").await;

    let resp = app.login("a@x.com", "wrong").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains(INVALID_CREDENTIALS));

    let resp = app.get("/visualization").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_unknown_email_gets_same_message() {
    let mut app = TestApp::new().await;
    app.register("Ana", "a@x.com", "pw123").await;

    let wrong_password = body_string(app.login("a@x.com", "nope").await).await;
    let unknown_email = body_string(app.login("b@x.com", "pw123").await).await;
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let mut app = TestApp::new().await;
    app.register("Ana", "a@x.com", "pw123").await;
    app.login("a@x.com", "pw123").await;
    assert_eq!(app.get("/visualization").await.status(), StatusCode::OK);

    let resp = app.get("/logout").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");

    let resp = app.get("/visualization").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn test_logout_when_anonymous_redirects_home() {
    let mut app = TestApp::new().await;
    let resp = app.get("/logout").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn test_session_is_per_browser() {
    let mut app = TestApp::new().await;
    app.register("Ana", "a@x.com", "pw123").await;
    app.login("a@x.com", "pw123").await;

    let mut other = app.new_browser();
    assert_eq!(other.get("/visualization").await.status(), StatusCode::FOUND);
    assert_eq!(app.get("/visualization").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_forged_cookie_is_anonymous() {
    let mut app = TestApp::new().await;
    app.set_cookie("session=not-a-signed-session-id");
    let resp = app.get("/visualization").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn test_duplicate_email_logs_in_first_user() {
    let mut app = TestApp::new().await;
    app.register("First", "dup@x.com", "one").await;
    app.register("Second", "dup@x.com", "two").await;

    let resp = app.login("dup@x.com", "two").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.login("dup@x.com", "one").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let body = body_string(app.get("/visualization").await).await;
    assert!(body.contains("Welcome, First!"));
}

#[tokio::test]
async fn test_register_missing_field_is_rejected() {
    let mut app = TestApp::new().await;
    let resp = app.post_form("/register", "name=Ana&email=a%40x.com").await;
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_restart_drops_sessions_even_with_fixed_secret() {
    let config = AppConfig {
        secret_key: Some("fixed-signing-secret".to_string()),
        ..AppConfig::default()
    };

    let mut before = TestApp::with_config(config.clone()).await;
    before.register("Ana", "a@x.com", "pw123").await;
    let resp = before.login("a@x.com", "pw123").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(before.get("/visualization").await.status(), StatusCode::OK);
    let cookie = before.cookie().unwrap().to_string();

    let mut after = TestApp::with_config(config).await;
    after.set_cookie(&cookie);
    let resp = after.get("/visualization").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");
}
