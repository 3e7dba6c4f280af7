//! Upload, listing, rename, trash lifecycle, and permanent delete.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_upload_and_list() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "report.pdf", b"pdf bytes").await;
    assert_eq!(upload.status, StatusCode::OK, "{:?}", upload.body);
    assert!(upload.body["filePath"]
        .as_str()
        .unwrap()
        .ends_with("report.pdf"));
    assert!(upload.body["publicUrl"]
        .as_str()
        .unwrap()
        .contains("/api/public/files/"));
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let list = app.request("GET", "/api/files", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["page"], 1);
    assert_eq!(list.body["limit"], 10);
    assert_eq!(list.body["total"], 1);
    assert_eq!(list.body["files"][0]["id"].as_str().unwrap(), file_id);
}

#[tokio::test]
async fn test_listing_is_owner_scoped() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (other, _) = app.register_user().await;

    app.upload(&owner, "private.txt", b"secret").await;

    let list = app.request("GET", "/api/files", None, Some(&other)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["total"], 0);
}

#[tokio::test]
async fn test_rename() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "old.txt", b"x").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();
    let file_path = upload.body["savedFile"]["file_path"]
        .as_str()
        .unwrap()
        .to_string();

    let rename = app
        .request(
            "PUT",
            &format!("/api/files/{file_id}/rename"),
            Some(serde_json::json!({ "new_name": "new.txt" })),
            Some(&token),
        )
        .await;
    assert_eq!(rename.status, StatusCode::OK);
    assert_eq!(rename.body["file"]["file_name"], "new.txt");
    // Renaming only changes the display name, not the blob key.
    assert_eq!(rename.body["file"]["file_path"].as_str().unwrap(), file_path);

    let blank = app
        .request(
            "PUT",
            &format!("/api/files/{file_id}/rename"),
            Some(serde_json::json!({ "new_name": "  " })),
            Some(&token),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_trash_and_restore_round_trip() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "cycle.txt", b"x").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let trash = app
        .request(
            "DELETE",
            &format!("/api/files/{file_id}/trash"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(trash.status, StatusCode::OK);
    assert_eq!(trash.body["file"]["is_deleted"], true);
    assert!(!trash.body["file"]["deleted_at"].is_null());

    // Trashed files leave the main listing and appear in /api/trash.
    let list = app.request("GET", "/api/files", None, Some(&token)).await;
    assert_eq!(list.body["total"], 0);
    let trashed = app.request("GET", "/api/trash", None, Some(&token)).await;
    assert_eq!(trashed.status, StatusCode::OK);
    assert_eq!(trashed.body[0]["id"].as_str().unwrap(), file_id);

    let restore = app
        .request(
            "PUT",
            &format!("/api/files/{file_id}/restore"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(restore.status, StatusCode::OK);
    assert_eq!(restore.body["file"]["is_deleted"], false);
    assert!(restore.body["file"]["deleted_at"].is_null());

    let list = app.request("GET", "/api/files", None, Some(&token)).await;
    assert_eq!(list.body["total"], 1);
}

#[tokio::test]
async fn test_permanent_delete_is_irreversible() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "doomed.txt", b"x").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let delete = app
        .request(
            "DELETE",
            &format!("/api/files/{file_id}/permanent"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::OK);

    // Every subsequent file route answers 404 for the dead ID.
    for (method, path) in [
        ("PUT", format!("/api/files/{file_id}/restore")),
        ("GET", format!("/api/files/{file_id}/signed-url")),
        ("GET", format!("/api/files/{file_id}/download")),
        ("DELETE", format!("/api/files/{file_id}/permanent")),
    ] {
        let response = app.request(method, &path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{method} {path}");
    }
}

#[tokio::test]
async fn test_signed_url_requires_ownership() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (other, _) = app.register_user().await;

    let upload = app.upload(&owner, "report.pdf", b"pdf bytes").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();
    let path = format!("/api/files/{file_id}/signed-url");

    // A non-owner sees 404, indistinguishable from a missing file.
    let denied = app.request("GET", &path, None, Some(&other)).await;
    assert_eq!(denied.status, StatusCode::NOT_FOUND);

    let granted = app.request("GET", &path, None, Some(&owner)).await;
    assert_eq!(granted.status, StatusCode::OK);
    assert_eq!(granted.body["expiresIn"], 600);
    assert!(granted.body["signedUrl"].as_str().unwrap().contains("sig="));
}

#[tokio::test]
async fn test_signed_url_serves_blob_and_rejects_tampering() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "blob.bin", b"blob contents").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let signed = app
        .request(
            "GET",
            &format!("/api/files/{file_id}/signed-url"),
            None,
            Some(&token),
        )
        .await;
    let url = signed.body["signedUrl"].as_str().unwrap();
    let path = url
        .strip_prefix("http://localhost:5000")
        .unwrap()
        .to_string();

    // The signed URL works without any bearer token.
    let fetched = app
        .request_raw("GET", &path, Vec::new(), "application/json", None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.raw, b"blob contents");

    let tampered = format!("{path}tamper");
    let rejected = app
        .request_raw("GET", &tampered, Vec::new(), "application/json", None)
        .await;
    assert_eq!(rejected.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_download_redirects() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    let upload = app.upload(&token, "dl.txt", b"x").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/files/{file_id}/download"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FOUND);
    let location = response.headers.get("location").unwrap().to_str().unwrap();
    assert!(location.contains("sig="));
}
