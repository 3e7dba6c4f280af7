//! Share link minting, public access, and revocation.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers;

/// Pull the opaque token out of a minted share URL.
fn token_of(share_url: &str) -> String {
    share_url.rsplit('/').next().unwrap().to_string()
}

#[tokio::test]
async fn test_mint_and_access_share() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "shared.txt", b"hello").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let minted = app
        .request("POST", &format!("/api/share/{file_id}"), None, Some(&token))
        .await;
    assert_eq!(minted.status, StatusCode::CREATED, "{:?}", minted.body);
    let share_url = minted.body["shareUrl"].as_str().unwrap();
    assert!(share_url.contains("/api/share/access/"));

    let share_token = token_of(share_url);
    assert_eq!(share_token.len(), 40);

    // Anyone holding the token can resolve it, no bearer token needed.
    let access = app
        .request(
            "GET",
            &format!("/api/share/access/{share_token}"),
            None,
            None,
        )
        .await;
    assert_eq!(access.status, StatusCode::OK);
    assert_eq!(access.body["permission"], "view");
    assert_eq!(access.body["file"]["id"].as_str().unwrap(), file_id);
}

#[tokio::test]
async fn test_access_rejects_unknown_token() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };

    let bogus = "0".repeat(40);
    let access = app
        .request("GET", &format!("/api/share/access/{bogus}"), None, None)
        .await;
    assert_eq!(access.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_access_hides_trashed_files() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "soon-gone.txt", b"x").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let minted = app
        .request("POST", &format!("/api/share/{file_id}"), None, Some(&token))
        .await;
    let share_token = token_of(minted.body["shareUrl"].as_str().unwrap());

    let trash = app
        .request(
            "DELETE",
            &format!("/api/files/{file_id}/trash"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(trash.status, StatusCode::OK);

    // A trashed file resolves exactly like an unknown token.
    let access = app
        .request(
            "GET",
            &format!("/api/share/access/{share_token}"),
            None,
            None,
        )
        .await;
    assert_eq!(access.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_revoke_share() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "revocable.txt", b"x").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let minted = app
        .request("POST", &format!("/api/share/{file_id}"), None, Some(&token))
        .await;
    let share_token = token_of(minted.body["shareUrl"].as_str().unwrap());

    let share_id: Uuid = sqlx::query_scalar("SELECT id FROM share_links WHERE token = $1")
        .bind(&share_token)
        .fetch_one(&app.db_pool)
        .await
        .expect("share row");

    let revoked = app
        .request(
            "DELETE",
            &format!("/api/share/{share_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(revoked.status, StatusCode::OK);
    assert_eq!(revoked.body["message"], "Share link revoked");

    let access = app
        .request(
            "GET",
            &format!("/api/share/access/{share_token}"),
            None,
            None,
        )
        .await;
    assert_eq!(access.status, StatusCode::NOT_FOUND);

    // Revoking twice reports the link as gone.
    let again = app
        .request(
            "DELETE",
            &format!("/api/share/{share_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_the_owner_can_mint() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (other, _) = app.register_user().await;

    let upload = app.upload(&owner, "mine.txt", b"x").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let minted = app
        .request("POST", &format!("/api/share/{file_id}"), None, Some(&other))
        .await;
    assert_eq!(minted.status, StatusCode::NOT_FOUND);
}
