//! Integration tests for the console shell session bootstrap.

use admin_console::session::{bootstrap, InitialState};
use admin_console::{BaseUrl, ConsoleConfig, HttpClient};
use serde_json::json;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer) -> ConsoleConfig {
    ConsoleConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

async fn run(server: &MockServer, current_path: &str) -> InitialState {
    let config = create_config(server);
    let client = HttpClient::console(&config).unwrap();
    bootstrap(&client, &config, current_path).await
}

#[tokio::test]
async fn test_login_page_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = run(&server, "/user/login").await;

    assert!(state.current_user.is_none());
    assert!(state.redirect.is_none());
    assert!(state.menu.is_empty());
}

#[tokio::test]
async fn test_signed_in_user_and_menu() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/currentUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"name": "Alice", "userid": 42, "access": "admin"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/menus"))
        .and(query_param("userId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"path": "/system", "name": "System", "children": [
                    {"path": "/system/users", "name": "Users"}
                ]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = run(&server, "/dashboard").await;

    let user = state.current_user.as_ref().unwrap();
    assert_eq!(user.name.as_deref(), Some("Alice"));
    assert_eq!(user.access.as_deref(), Some("admin"));
    assert_eq!(state.menu.len(), 1);
    assert_eq!(state.menu[0].children.len(), 1);
    assert!(state.redirect.is_none());
    assert_eq!(state.guard_navigation("/system/users"), None);
}

#[tokio::test]
async fn test_failed_user_fetch_redirects_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/currentUser"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "errorMessage": "not signed in"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/menus"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = run(&server, "/dashboard").await;

    assert!(state.current_user.is_none());
    assert_eq!(state.redirect.as_deref(), Some("/user/login"));
    assert_eq!(state.guard_navigation("/system"), Some("/user/login"));
}

#[tokio::test]
async fn test_rejected_user_envelope_redirects_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/currentUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errorCode": "401",
            "showType": 9
        })))
        .mount(&server)
        .await;

    let state = run(&server, "/").await;

    assert_eq!(state.redirect.as_deref(), Some("/user/login"));
}

#[tokio::test]
async fn test_failed_menu_fetch_keeps_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/currentUser"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"name": "Bob", "userid": "u-1"}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/menus"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let state = run(&server, "/dashboard").await;

    assert!(state.is_signed_in());
    assert!(state.menu.is_empty());
    assert!(state.redirect.is_none());
}

#[tokio::test]
async fn test_custom_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"name": "Cy"}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ConsoleConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .login_path("/signin")
        .current_user_path("/auth/me")
        .menu_path("/auth/menu")
        .build()
        .unwrap();
    let client = HttpClient::console(&config).unwrap();

    let state = bootstrap(&client, &config, "/home").await;
    assert!(state.is_signed_in());
    assert_eq!(state.login_path(), "/signin");

    let state = bootstrap(&client, &config, "/signin").await;
    assert!(!state.is_signed_in());
    assert!(state.redirect.is_none());
}

#[tokio::test]
async fn test_hidden_menu_entries_are_not_listed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/currentUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"name": "Alice", "userid": "7"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/menus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"path": "/welcome", "name": "Welcome"},
                {"path": "/profile", "hideInMenu": true},
                {"path": "/system", "name": "System", "children": [
                    {"path": "/system/users", "name": "Users"},
                    {"path": "/system/audit", "hideInMenu": true}
                ]}
            ]
        })))
        .mount(&server)
        .await;

    let state = run(&server, "/welcome").await;

    assert_eq!(state.menu.len(), 3);
    let listed: Vec<_> = state
        .visible_menu()
        .iter()
        .filter_map(|item| item.name.as_deref())
        .collect();
    assert_eq!(listed, vec!["Welcome", "System", "Users"]);
}
