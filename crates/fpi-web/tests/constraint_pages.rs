//! HTTP tests for the constraint pages.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use fpi_core::{ConstraintStore, MemoryStore, SledStore};
use fpi_web::{create_router, AppState, WebConfig};
use serde_json::{json, Value};

fn server_with(store: Arc<dyn ConstraintStore>) -> TestServer {
    let state = AppState::new(store, WebConfig::default());
    TestServer::new(create_router(state)).unwrap()
}

fn server() -> (Arc<MemoryStore>, TestServer) {
    let store = Arc::new(MemoryStore::new());
    let server = server_with(store.clone());
    (store, server)
}

fn weight(max: &str) -> Vec<(&'static str, String)> {
    vec![
        ("constraint_name", "Weight".to_string()),
        ("constraint_descr", String::new()),
        ("constraint_type", "Int-MM".to_string()),
        ("constraint_min", "0".to_string()),
        ("constraint_max", max.to_string()),
        ("constraint_list", String::new()),
    ]
}

#[tokio::test]
async fn test_health() {
    let (_, server) = server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fpi-web");
    assert_eq!(body["constraints"], 0);
}

#[tokio::test]
async fn test_index_and_about() {
    let (_, server) = server();

    let response = server.get("/fpiweb/").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Hello world from Food Pantry Inventory.");

    let response = server.get("/fpiweb/about/").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["template"], "fpiweb/about.html");
    assert_eq!(body["context"], json!({}));
}

#[tokio::test]
async fn test_list_empty() {
    let (_, server) = server();

    let response = server.get("/fpiweb/constraints/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["template"], "fpiweb/constraints_list.html");
    assert_eq!(body["context"]["constraints_list_content"], json!([]));
    assert_eq!(body["context"]["project_type"], "open source");
    assert_eq!(body["context"]["range_list"], json!(["Int-MM", "Char-MM"]));
}

#[tokio::test]
async fn test_create_redirects_to_list() {
    let (store, server) = server();

    let response = server.post("/fpiweb/constraints/new/").form(&weight("500")).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/fpiweb/constraints/");
    assert_eq!(store.count().unwrap(), 1);
}

#[tokio::test]
async fn test_create_invalid_rerenders_form() {
    let (store, server) = server();

    let mut form = weight("500");
    form[2].1 = "Float-MM".to_string();
    let response = server.post("/fpiweb/constraints/new/").form(&form).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["template"], "fpiweb/constraint_edit.html");
    assert_eq!(body["context"]["action"], "/fpiweb/constraints/new/");
    assert_eq!(body["context"]["form"]["constraint_type"], "Float-MM");
    assert!(body["context"]["form_errors"]["fields"]["constraint_type"].is_array());
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_missing_record_is_not_found() {
    let (_, server) = server();

    for path in [
        "/fpiweb/constraint/7/",
        "/fpiweb/constraint/7/edit/",
        "/fpiweb/constraint/7/delete/",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["code"], "NOT_FOUND");
    }

    let response = server.post("/fpiweb/constraint/7/delete/").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.post("/fpiweb/constraint/7/edit/").form(&weight("1")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unparseable_id_is_not_found() {
    let (_, server) = server();

    for path in [
        "/fpiweb/constraint/abc/",
        "/fpiweb/constraint/99999999999999999999999/",
        "/fpiweb/constraint/abc/edit/",
        "/fpiweb/constraint/-1/delete/",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["error"], true);
    }

    let response = server.post("/fpiweb/constraint/abc/delete/").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");

    let response = server.post("/fpiweb/constraint/abc/edit/").form(&weight("1")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_form_body_is_bad_request() {
    let (store, server) = server();

    let response = server
        .post("/fpiweb/constraints/new/")
        .json(&json!({"constraint_name": "Weight", "constraint_type": "Int-MM"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["error"], true);
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_missing_trailing_slash_redirects() {
    let (_, server) = server();

    let response = server.get("/fpiweb/constraints").await;
    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "/fpiweb/constraints/");

    let response = server.get("/fpiweb/constraint/3/edit").await;
    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "/fpiweb/constraint/3/edit/");

    let response = server.get("/fpiweb/about").add_query_param("page", "2").await;
    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "/fpiweb/about/?page=2");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (_, server) = server();

    for path in ["/fpiweb/nowhere/", "/fpiweb/nowhere", "/elsewhere"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_edit_form_prefilled() {
    let (_, server) = server();
    server.post("/fpiweb/constraints/new/").form(&weight("500")).await;

    let response = server.get("/fpiweb/constraint/1/edit/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["template"], "fpiweb/constraints_edit.html");
    assert_eq!(body["context"]["action"], "/fpiweb/constraint/1/edit/");
    assert_eq!(body["context"]["form"]["constraint_max"], "500");
    assert_eq!(body["context"]["object"]["constraint_id"], 1);
}

#[tokio::test]
async fn test_delete_confirm_then_delete() {
    let (store, server) = server();
    server.post("/fpiweb/constraints/new/").form(&weight("500")).await;

    let response = server.get("/fpiweb/constraint/1/delete/").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["template"], "fpiweb/constraints_delete.html");
    assert_eq!(body["context"]["action"], "/fpiweb/constraint/1/delete/");
    assert_eq!(store.count().unwrap(), 1);

    let response = server.post("/fpiweb/constraint/1/delete/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/fpiweb/constraints/");
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_full_lifecycle_on_sled() {
    let server = server_with(Arc::new(SledStore::temporary().unwrap()));

    // 1. Create
    let response = server.post("/fpiweb/constraints/new/").form(&weight("500")).await;
    response.assert_status(StatusCode::SEE_OTHER);

    // 2. List shows the one record
    let body: Value = server.get("/fpiweb/constraints/").await.json();
    let records = body["context"]["constraints_list_content"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["constraint_name"], "Weight");
    assert_eq!(records[0]["display"], "Weight - 0 to 500 (Int-MM)");
    let id = records[0]["constraint_id"].as_u64().unwrap();

    // 3. Update the maximum
    let response = server
        .post(&format!("/fpiweb/constraint/{id}/edit/"))
        .form(&weight("1000"))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    // 4. Detail reflects the update
    let body: Value = server.get(&format!("/fpiweb/constraint/{id}/")).await.json();
    assert_eq!(body["template"], "fpiweb/constraint_detail.html");
    assert_eq!(body["context"]["constraint"]["constraint_id"], id);
    assert_eq!(body["context"]["constraint"]["constraint_max"], "1000");
    assert_eq!(body["context"]["object"]["display"], "Weight - 0 to 1000 (Int-MM)");
    assert_eq!(body["context"]["constraint_info"].as_array().unwrap().len(), 1);

    // 5. Delete and the list is empty again
    let response = server.post(&format!("/fpiweb/constraint/{id}/delete/")).await;
    response.assert_status(StatusCode::SEE_OTHER);

    let body: Value = server.get("/fpiweb/constraints/").await.json();
    assert_eq!(body["context"]["constraints_list_content"], json!([]));
}
