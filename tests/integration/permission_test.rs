//! Per-file permission grant tests.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers;
use crate::helpers::TestApp;

async fn upload_file(app: &TestApp, token: &str) -> String {
    let upload = app.upload(token, "granted.txt", b"x").await;
    assert_eq!(upload.status, StatusCode::OK);
    upload.body["savedFile"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_add_and_update_grant() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (_, grantee_id) = app.register_user().await;
    let file_id = upload_file(&app, &owner).await;

    let added = app
        .request(
            "POST",
            "/api/permissions/add",
            Some(json!({ "fileId": file_id, "userId": grantee_id, "role": "viewer" })),
            Some(&owner),
        )
        .await;
    assert_eq!(added.status, StatusCode::CREATED, "{:?}", added.body);
    assert_eq!(added.body["permission"]["role"], "viewer");
    assert_eq!(
        added.body["permission"]["user_id"].as_str().unwrap(),
        grantee_id.to_string()
    );

    // Adding the same pair again upgrades the role in place.
    let re_added = app
        .request(
            "POST",
            "/api/permissions/add",
            Some(json!({ "fileId": file_id, "userId": grantee_id, "role": "editor" })),
            Some(&owner),
        )
        .await;
    assert_eq!(re_added.status, StatusCode::CREATED);
    assert_eq!(re_added.body["permission"]["role"], "editor");

    let updated = app
        .request(
            "PUT",
            "/api/permissions/update",
            Some(json!({ "fileId": file_id, "userId": grantee_id, "role": "viewer" })),
            Some(&owner),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["permission"]["role"], "viewer");
}

#[tokio::test]
async fn test_update_missing_grant_is_not_found() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (_, grantee_id) = app.register_user().await;
    let file_id = upload_file(&app, &owner).await;

    let updated = app
        .request(
            "PUT",
            "/api/permissions/update",
            Some(json!({ "fileId": file_id, "userId": grantee_id, "role": "editor" })),
            Some(&owner),
        )
        .await;
    assert_eq!(updated.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_grant() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (_, grantee_id) = app.register_user().await;
    let file_id = upload_file(&app, &owner).await;

    app.request(
        "POST",
        "/api/permissions/add",
        Some(json!({ "fileId": file_id, "userId": grantee_id, "role": "viewer" })),
        Some(&owner),
    )
    .await;

    let removed = app
        .request(
            "DELETE",
            "/api/permissions/remove",
            Some(json!({ "fileId": file_id, "userId": grantee_id })),
            Some(&owner),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body["message"], "Permission removed");

    let again = app
        .request(
            "DELETE",
            "/api/permissions/remove",
            Some(json!({ "fileId": file_id, "userId": grantee_id })),
            Some(&owner),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_the_owner_manages_grants() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (other, other_id) = app.register_user().await;
    let file_id = upload_file(&app, &owner).await;

    // A non-owner cannot grant access to someone else's file.
    let added = app
        .request(
            "POST",
            "/api/permissions/add",
            Some(json!({ "fileId": file_id, "userId": other_id, "role": "viewer" })),
            Some(&other),
        )
        .await;
    assert_eq!(added.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_grant_validation() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (_, grantee_id) = app.register_user().await;
    let file_id = upload_file(&app, &owner).await;

    let bad_role = app
        .request(
            "POST",
            "/api/permissions/add",
            Some(json!({ "fileId": file_id, "userId": grantee_id, "role": "owner" })),
            Some(&owner),
        )
        .await;
    assert_eq!(bad_role.status, StatusCode::BAD_REQUEST);

    let unknown_grantee = app
        .request(
            "POST",
            "/api/permissions/add",
            Some(json!({ "fileId": file_id, "userId": Uuid::new_v4(), "role": "viewer" })),
            Some(&owner),
        )
        .await;
    assert_eq!(unknown_grantee.status, StatusCode::NOT_FOUND);
}
