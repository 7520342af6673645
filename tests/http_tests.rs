//! End-to-end checks through the default reqwest transport against a local
//! mock server. The client is blocking, so each call runs on a blocking thread.

use std::sync::Arc;

use serde_json::json;
use toggl_api::{Config, ReqwestTransport, Toggl, TogglError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FAKE_TOKEN: &str = "fake_token_1";
const EXPECTED_AUTH: &str = "Basic ZmFrZV90b2tlbl8xOmFwaV90b2tlbg==";

async fn run<T, F>(server: &MockServer, call: F) -> T
where
    F: FnOnce(Toggl) -> T + Send + 'static,
    T: Send + 'static,
{
    let api_url = format!("{}/api/v8", server.uri());
    tokio::task::spawn_blocking(move || {
        let toggl = Toggl::with_url(FAKE_TOKEN, api_url).expect("failed to build client");
        call(toggl)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test]
async fn test_wrong_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v8/me"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let result = run(&server, |toggl| toggl.user.get()).await;

    assert!(matches!(result, Err(TogglError::Auth { status: 403, .. })));
}

#[tokio::test]
async fn test_user_get_sends_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v8/me"))
        .and(header("Authorization", EXPECTED_AUTH))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "since": 1361780172,
            "data": {"id": 123, "fullname": "John Swift", "email": "john@swift.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = run(&server, |toggl| toggl.user.get()).await.unwrap();

    assert_eq!(response.get_string("data/email"), Some("john@swift.com".to_string()));
}

#[tokio::test]
async fn test_clients_create() {
    let server = MockServer::start().await;
    let new_client = json!({"client": {"name": "Very Big Company", "wid": 777}});
    Mock::given(method("POST"))
        .and(path("/api/v8/clients"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(new_client.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1239455, "wid": 777, "name": "Very Big Company"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = run(&server, move |toggl| toggl.clients.create(&new_client))
        .await
        .unwrap();

    assert_eq!(response.get_i64("data/id"), Some(1239455));
}

#[tokio::test]
async fn test_clients_get_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v8/clients/1239455"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1239455, "name": "Very Big Company"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = run(&server, |toggl| toggl.clients.get(1239455)).await.unwrap();

    assert_eq!(response.get_string("data/name"), Some("Very Big Company".to_string()));
    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_delete_with_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v8/tags/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = run(&server, |toggl| toggl.tags.delete(1)).await.unwrap();

    assert!(response.is_empty());
}

#[tokio::test]
async fn test_server_error_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v8/time_entries/9/stop"))
        .respond_with(ResponseTemplate::new(500).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let err = run(&server, |toggl| toggl.time_entries.stop(9)).await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.body(), Some("maintenance"));
    assert!(!err.is_auth_error());
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api_url = format!("http://127.0.0.1:{}/api/v8", port);

    let result = tokio::task::spawn_blocking(move || {
        let toggl = Toggl::with_url(FAKE_TOKEN, api_url).unwrap();
        toggl.user.get()
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(TogglError::Transport(_))));
}

#[tokio::test]
async fn test_preconfigured_reqwest_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v8/me"))
        .and(header("Authorization", EXPECTED_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 123}})))
        .expect(1)
        .mount(&server)
        .await;

    let api_url = format!("{}/api/v8", server.uri());
    let response = tokio::task::spawn_blocking(move || {
        let client = reqwest::blocking::Client::new();
        let transport = Arc::new(ReqwestTransport::with_client(client));
        let toggl = Toggl::with_transport(FAKE_TOKEN, Config::new(api_url), transport)?;
        toggl.user.get()
    })
    .await
    .expect("blocking task panicked")
    .unwrap();

    assert_eq!(response.get_i64("data/id"), Some(123));
}
