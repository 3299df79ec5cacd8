use mockito::Matcher;

use tunescope::{backend::BackendClient, error::ApiError};

#[tokio::test]
async fn ping_succeeds_when_backend_answers() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/ping")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let client = BackendClient::new(server.url());
    client.ping().await.unwrap();
}

#[tokio::test]
async fn ping_reports_unreachable_backend() {
    // Nothing listens here; the connection attempt itself fails
    let client = BackendClient::new("http://127.0.0.1:1");
    match client.ping().await {
        Err(ApiError::BackendUnreachable(_)) => {}
        other => panic!("expected BackendUnreachable, got {:?}", other),
    }
}

#[tokio::test]
async fn ping_treats_error_status_as_unreachable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/ping")
        .with_status(500)
        .create_async()
        .await;

    let client = BackendClient::new(server.url());
    match client.ping().await {
        Err(ApiError::BackendUnreachable(_)) => {}
        other => panic!("expected BackendUnreachable, got {:?}", other),
    }
}

#[tokio::test]
async fn login_url_parses_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"auth_url": "https://accounts.example/authorize"}"#)
        .create_async()
        .await;

    let client = BackendClient::new(server.url());
    let url = client.login_url().await.unwrap();
    assert_eq!(url, "https://accounts.example/authorize");
}

#[tokio::test]
async fn exchange_code_accepts_missing_refresh_token() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/callback")
        .match_query(Matcher::UrlEncoded("code".into(), "XYZ".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "tok-xyz", "expires_in": 3600}"#)
        .create_async()
        .await;

    let client = BackendClient::new(server.url());
    let token = client.exchange_code("XYZ").await.unwrap();
    assert_eq!(token.access_token, "tok-xyz");
    assert_eq!(token.refresh_token, None);
}

#[tokio::test]
async fn exchange_code_rejects_empty_access_token() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/callback")
        .match_query(Matcher::UrlEncoded("code".into(), "XYZ".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": ""}"#)
        .create_async()
        .await;

    let client = BackendClient::new(server.url());
    match client.exchange_code("XYZ").await {
        Err(ApiError::CodeExchangeFailed(_)) => {}
        other => panic!("expected CodeExchangeFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn authorized_reads_send_the_raw_token_header() {
    let mut server = mockito::Server::new_async().await;
    // The backend validates the bare token value, not a "Bearer ..." string
    let mock = server
        .mock("GET", "/api/user/profile")
        .match_header("authorization", Matcher::Exact("tok-raw".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "user-1"}"#)
        .create_async()
        .await;

    let client = BackendClient::new(server.url());
    let profile = client.profile("tok-raw").await.unwrap();
    assert_eq!(profile.id, "user-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_items_defaults_to_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/user/top-tracks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = BackendClient::new(server.url());
    let tracks = client.top_tracks("tok-1").await.unwrap();
    assert!(tracks.is_empty());
}

#[tokio::test]
async fn fetch_error_surfaces_backend_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/user/top-tracks")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "kaboom"}"#)
        .create_async()
        .await;

    let client = BackendClient::new(server.url());
    match client.top_tracks("tok-1").await {
        Err(ApiError::FetchFailed(reason)) => assert!(reason.contains("kaboom")),
        other => panic!("expected FetchFailed, got {:?}", other),
    }
}
