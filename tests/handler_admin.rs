mod common;

use axum::http::Method;
use axum_test::TestServer;
use std::sync::Arc;
use tendsto::domain::repositories::MappingRepository;
use tendsto::infrastructure::persistence::SqliteMappingRepository;
use tendsto::web::routes::admin_router;

async fn test_server() -> (TestServer, Arc<SqliteMappingRepository>) {
    let store = common::create_test_store().await;
    let app = admin_router(common::create_test_state(store.clone()));
    (TestServer::new(app).unwrap(), store)
}

#[tokio::test]
async fn test_listing_empty_store() {
    let (server, _store) = test_server().await;

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<form"));
}

#[tokio::test]
async fn test_create_then_list() {
    let (server, store) = test_server().await;

    let response = server
        .post("/")
        .form(&[("shortcode", "abc"), ("url", "https://example.com")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/");
    assert_eq!(store.get("abc").await.unwrap(), "https://example.com");

    let page = server.get("/").await;
    page.assert_status_ok();
    let body = page.text();
    assert!(body.contains("abc"));
    assert!(body.contains("example.com"));
}

#[tokio::test]
async fn test_create_missing_shortcode() {
    let (server, store) = test_server().await;

    let response = server
        .post("/")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "missing parameter");
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_empty_url() {
    let (server, store) = test_server().await;

    let response = server
        .post("/")
        .form(&[("shortcode", "abc"), ("url", "")])
        .await;

    response.assert_status_bad_request();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_without_form_body() {
    let (server, store) = test_server().await;

    let response = server.post("/").await;

    response.assert_status_bad_request();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_duplicate_keeps_original() {
    let (server, store) = test_server().await;
    common::create_test_mapping(&store, "abc", "https://first.example").await;

    let response = server
        .post("/")
        .form(&[("shortcode", "abc"), ("url", "https://second.example")])
        .await;

    assert_eq!(response.status_code(), 500);
    assert!(
        response
            .text()
            .starts_with("could not set /abc -> https://second.example:")
    );
    assert_eq!(store.get("abc").await.unwrap(), "https://first.example");
}

#[tokio::test]
async fn test_put_is_method_not_allowed() {
    let (server, _store) = test_server().await;

    let response = server.put("/").await;

    assert_eq!(response.status_code(), 405);
    assert_eq!(response.text(), "bad method");
}

#[tokio::test]
async fn test_delete_is_method_not_allowed() {
    let (server, _store) = test_server().await;

    let response = server.method(Method::DELETE, "/").await;

    assert_eq!(response.status_code(), 405);
}

#[tokio::test]
async fn test_other_path_is_not_found() {
    let (server, store) = test_server().await;
    common::create_test_mapping(&store, "other", "https://example.com").await;

    server.get("/other").await.assert_status_not_found();

    let response = server
        .post("/other")
        .form(&[("shortcode", "x"), ("url", "https://x.example")])
        .await;
    response.assert_status_not_found();
    assert!(matches!(
        store.get("x").await,
        Err(tendsto::StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_unreadable_row_renders_placeholder() {
    let (server, store) = test_server().await;
    common::create_test_mapping(&store, "first", "https://first.example").await;
    common::create_unreadable_mapping(&store, "broken").await;
    common::create_test_mapping(&store, "last", "https://last.example").await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("could not read row"));
    assert!(!body.contains("/could not read row"));
    assert!(body.contains("first.example"));
    assert!(body.contains("last.example"));
}

#[tokio::test]
async fn test_listing_escapes_html() {
    let (server, store) = test_server().await;
    common::create_test_mapping(&store, "xss", "https://example.com/<script>").await;

    let body = server.get("/").await.text();

    assert!(!body.contains("<script>"));
    assert!(body.contains("&#60;script&#62;") || body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_create_from_query_string() {
    let (server, store) = test_server().await;

    let response = server.post("/?shortcode=q&url=https://q.example").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(store.get("q").await.unwrap(), "https://q.example");
}

#[tokio::test]
async fn test_create_from_multipart_body() {
    let (server, store) = test_server().await;
    let boundary = "----tendsto-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"shortcode\"\r\n\r\n\
         mp\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"url\"\r\n\r\n\
         https://multipart.example\r\n\
         --{boundary}--\r\n"
    );

    let response = server
        .post("/")
        .bytes(body.into())
        .content_type(&format!("multipart/form-data; boundary={boundary}"))
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(store.get("mp").await.unwrap(), "https://multipart.example");
}

#[tokio::test]
async fn test_create_takes_first_of_repeated_field() {
    let (server, store) = test_server().await;

    let response = server
        .post("/")
        .form(&[
            ("shortcode", "a"),
            ("shortcode", "b"),
            ("url", "https://repeat.example"),
        ])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(store.get("a").await.unwrap(), "https://repeat.example");
    assert!(matches!(
        store.get("b").await,
        Err(tendsto::StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_create_body_wins_over_query() {
    let (server, store) = test_server().await;

    let response = server
        .post("/?shortcode=from-query")
        .form(&[("shortcode", "from-body"), ("url", "https://body.example")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(store.get("from-body").await.unwrap(), "https://body.example");
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_listing_does_not_link_script_urls() {
    let (server, store) = test_server().await;
    common::create_test_mapping(&store, "js", "javascript:alert(1)").await;
    common::create_test_mapping(&store, "web", "https://web.example").await;

    let body = server.get("/").await.text();

    assert!(body.contains("javascript:alert(1)"));
    assert!(!body.contains("href=\"javascript:"));
    assert!(body.contains("href=\"https:"));
}
