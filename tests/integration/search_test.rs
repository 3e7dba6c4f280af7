//! Search endpoint tests.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_file_name_search() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    app.upload(&token, "quarterly-report.pdf", b"a").await;
    app.upload(&token, "annual-report.pdf", b"b").await;
    app.upload(&token, "vacation.jpg", b"c").await;

    let found = app
        .request("GET", "/api/search/files?q=report", None, Some(&token))
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["query"], "report");
    assert_eq!(found.body["results"].as_array().unwrap().len(), 2);

    // Matching is case-insensitive.
    let upper = app
        .request("GET", "/api/search/files?q=REPORT", None, Some(&token))
        .await;
    assert_eq!(upper.body["results"].as_array().unwrap().len(), 2);

    let none = app
        .request("GET", "/api/search/files?q=missing", None, Some(&token))
        .await;
    assert_eq!(none.body["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_search_respects_limit_and_offset() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    for i in 0..3 {
        app.upload(&token, &format!("batch-{i}.txt"), b"x").await;
    }

    let limited = app
        .request(
            "GET",
            "/api/search/files?q=batch&limit=2",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(limited.body["results"].as_array().unwrap().len(), 2);

    let offset = app
        .request(
            "GET",
            "/api/search/files?q=batch&limit=2&offset=2",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(offset.body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_folder_search() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    for name in ["Tax Documents", "Travel Photos"] {
        let created = app
            .request(
                "POST",
                "/api/folders",
                Some(serde_json::json!({ "name": name })),
                Some(&token),
            )
            .await;
        assert_eq!(created.status, StatusCode::CREATED);
    }

    let found = app
        .request("GET", "/api/search/folders?q=tax", None, Some(&token))
        .await;
    assert_eq!(found.status, StatusCode::OK);
    let results = found.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Tax Documents");
}

#[tokio::test]
async fn test_fulltext_search() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    app.upload(&token, "meeting notes january.txt", b"x").await;
    app.upload(&token, "grocery list.txt", b"y").await;

    let found = app
        .request(
            "GET",
            "/api/search/fulltext?q=meeting%20notes",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(found.status, StatusCode::OK);
    let results = found.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0]["file_name"]
        .as_str()
        .unwrap()
        .contains("meeting notes"));
}

#[tokio::test]
async fn test_blank_query_is_rejected() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (token, _) = app.register_user().await;

    for path in [
        "/api/search/files?q=%20%20",
        "/api/search/folders?q=",
        "/api/search/fulltext?q=",
    ] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
    }
}

#[tokio::test]
async fn test_search_is_owner_scoped_and_skips_trash() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (owner, _) = app.register_user().await;
    let (other, _) = app.register_user().await;

    let upload = app.upload(&owner, "confidential-plan.txt", b"x").await;
    let file_id = upload.body["savedFile"]["id"].as_str().unwrap().to_string();

    let foreign = app
        .request(
            "GET",
            "/api/search/files?q=confidential",
            None,
            Some(&other),
        )
        .await;
    assert_eq!(foreign.body["results"].as_array().unwrap().len(), 0);

    app.request(
        "DELETE",
        &format!("/api/files/{file_id}/trash"),
        None,
        Some(&owner),
    )
    .await;

    let trashed = app
        .request(
            "GET",
            "/api/search/files?q=confidential",
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(trashed.body["results"].as_array().unwrap().len(), 0);
}
