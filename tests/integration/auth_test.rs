//! Registration, login, and profile tests.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_register_login_me_round_trip() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };

    let email = format!("roundtrip-{}@test.example", uuid::Uuid::new_v4());
    let register = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "email": email, "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(register.status, StatusCode::CREATED);
    assert!(register.body["token"].is_string());
    // The password hash must never appear in responses.
    assert!(register.body["user"].get("password_hash").is_none());

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["token"].as_str().unwrap().to_string();

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["user"]["email"].as_str().unwrap(), email);
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };

    let email = format!("wrongpw-{}@test.example", uuid::Uuid::new_v4());
    app.request(
        "POST",
        "/api/auth/register",
        Some(serde_json::json!({ "email": email, "password": "password123" })),
        None,
    )
    .await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "not-the-password" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);

    // Unknown accounts get the same error as wrong passwords.
    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@test.example",
                "password": "password123"
            })),
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["error"], login.body["error"]);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };

    let email = format!("dup-{}@test.example", uuid::Uuid::new_v4());
    let body = serde_json::json!({ "email": email, "password": "password123" });

    let first = app
        .request("POST", "/api/auth/register", Some(body.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/auth/register", Some(body), None)
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };

    let no_token = app.request("GET", "/api/files", None, None).await;
    assert_eq!(no_token.status, StatusCode::UNAUTHORIZED);

    let bad_token = app
        .request("GET", "/api/files", None, Some("not-a-jwt"))
        .await;
    assert_eq!(bad_token.status, StatusCode::UNAUTHORIZED);
}
