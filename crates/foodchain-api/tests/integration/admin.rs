//! The admin listing, ungated by default and optionally gated.

use foodchain_api::AppConfig;
use http::StatusCode;

use crate::common::{body_string, location, TestApp};

#[tokio::test]
async fn test_admin_lists_users_without_login() {
    let mut app = TestApp::new().await;
    app.register("Ana", "a@x.com", "pw123").await;
    app.register("Ben", "b@x.com", "pw456").await;

    let mut visitor = app.new_browser();
    let resp = visitor.get("/admin").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("<li><b>Ana</b> (a@x.com)</li>"));
    assert!(body.contains("<li><b>Ben</b> (b@x.com)</li>"));
    assert!(body.find("Ana") < body.find("Ben"));
}

#[tokio::test]
async fn test_admin_never_shows_password_hashes() {
    let mut app = TestApp::new().await;
    app.register("Ana", "a@x.com", "pw123").await;
    let body = body_string(app.get("/admin").await).await;
    assert!(!body.contains("$argon2"));
    assert!(!body.contains("pw123"));
}

#[tokio::test]
async fn test_admin_escapes_user_input() {
    let mut app = TestApp::new().await;
    app.register("<script>alert(1)</script>", "x@x.com", "pw").await;
    let body = body_string(app.get("/admin").await).await;
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_gated_admin_requires_login() {
    let config = AppConfig {
        gate_admin: true,
        ..AppConfig::default()
    };
    let mut app = TestApp::with_config(config).await;
    app.register("Ana", "a@x.com", "pw123").await;

    let resp = app.get("/admin").await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/login");

    app.login("a@x.com", "pw123").await;
    let resp = app.get("/admin").await;
    assert_eq!(resp.status(), StatusCode::OK);
}
