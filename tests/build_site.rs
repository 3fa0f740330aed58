//! Full build cycles against a mocked endpoint: output layout, asset
//! copying, and the keep-previous-output failure semantics.

use std::fs;
use std::path::Path;

use idiots_live::config::Config;
use idiots_live::site;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(endpoint: String, output_dir: &Path, static_dir: &Path) -> Config {
    Config {
        graphql_endpoint: endpoint,
        musician_id: "1".to_string(),
        live_base_url: "https://indistreet.com".to_string(),
        site_base_url: "https://live.idiots.band".to_string(),
        output_dir: output_dir.to_string_lossy().into_owned(),
        static_dir: static_dir.to_string_lossy().into_owned(),
        templates_dir: "templates".to_string(),
        revalidate_secs: 60 * 50,
        rust_log: "debug".to_string(),
    }
}

async fn graphql_server(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/graphql", server.uri())
}

#[tokio::test]
async fn build_writes_the_page_and_copies_assets() {
    let server = graphql_server(json!({
        "data": { "lives": [
            { "id": "3", "title": "예정 공연", "startDate": "2100-01-01T11:00:00.000Z", "isCanceled": null },
            { "id": "2", "title": "취소 공연", "startDate": "2022-02-01T11:00:00.000Z", "isCanceled": true },
            { "id": "1", "title": "지난 공연", "startDate": "2022-01-01T11:00:00.000Z", "isCanceled": false },
        ]}
    }))
    .await;

    let out = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    fs::write(assets.path().join("bg.jpeg"), b"jpeg bytes").unwrap();

    let summary = site::build(&config(endpoint(&server), out.path(), assets.path()))
        .await
        .unwrap();

    // The cancelled record never makes it into the snapshot.
    assert_eq!(summary.total, 2);
    assert_eq!(summary.completed, 1);

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("<strong>1</strong>"));
    assert!(html.contains("지난 공연"));
    assert!(html.contains("예정 공연"));
    assert!(!html.contains("취소 공연"));
    assert!(html.contains("/static/bg.jpeg?v="));

    let copied = fs::read(out.path().join("static").join("bg.jpeg")).unwrap();
    assert_eq!(copied, b"jpeg bytes");
}

#[tokio::test]
async fn a_failed_fetch_leaves_the_previous_output_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let out = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    fs::write(out.path().join("index.html"), "previous build").unwrap();

    let result = site::build(&config(endpoint(&server), out.path(), assets.path())).await;

    assert!(result.is_err());
    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert_eq!(html, "previous build");
}

#[tokio::test]
async fn a_rebuild_replaces_the_published_page_wholesale() {
    let out = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();

    let first = graphql_server(json!({
        "data": { "lives": [
            { "id": "1", "title": "첫 공연", "startDate": "2022-01-01T11:00:00.000Z", "isCanceled": false },
        ]}
    }))
    .await;
    site::build(&config(endpoint(&first), out.path(), assets.path()))
        .await
        .unwrap();
    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("<strong>1</strong>"));

    let second = graphql_server(json!({
        "data": { "lives": [
            { "id": "2", "title": "둘째 공연", "startDate": "2022-06-01T11:00:00.000Z", "isCanceled": false },
            { "id": "1", "title": "첫 공연", "startDate": "2022-01-01T11:00:00.000Z", "isCanceled": false },
        ]}
    }))
    .await;
    site::build(&config(endpoint(&second), out.path(), assets.path()))
        .await
        .unwrap();
    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("<strong>2</strong>"));
    assert!(html.contains("둘째 공연"));
}

#[tokio::test]
async fn a_missing_static_dir_still_builds_the_page() {
    let server = graphql_server(json!({ "data": { "lives": [] } })).await;

    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("no-static-here");

    let summary = site::build(&config(endpoint(&server), out.path(), &missing))
        .await
        .unwrap();

    assert_eq!(summary.total, 0);
    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    // Unhashed fallback path when the asset is absent.
    assert!(html.contains("/static/bg.jpeg"));
    assert!(!html.contains("/static/bg.jpeg?v="));
}
