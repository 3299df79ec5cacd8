use mockito::{Mock, ServerGuard};
use tempfile::TempDir;

use tunescope::{
    backend::BackendClient,
    error::ApiError,
    management::{self, ACCESS_TOKEN_KEY, SessionManager, SessionState, SessionStore},
    types::{Profile, Token, UserSnapshot},
};

const PROFILE_BODY: &str = r#"{"id": "user-1", "display_name": "Test User", "images": []}"#;
const EMPTY_ITEMS: &str = r#"{"items": []}"#;
const TRACKS_BODY: &str = r#"{"items": [{"id": "t1", "name": "Song A", "artists": [{"name": "Artist X"}], "album": {"images": []}, "external_urls": {"spotify": "u1"}}]}"#;

const USER_PATHS: [&str; 4] = [
    "/api/user/profile",
    "/api/user/top-tracks",
    "/api/user/top-artists",
    "/api/user/playlists",
];

async fn authed_session(dir: &TempDir) -> (SessionStore, SessionManager) {
    let store = SessionStore::with_root(dir.path().join("session"));
    store
        .save_token(&Token {
            access_token: "tok-1".to_string(),
            refresh_token: None,
        })
        .await
        .unwrap();
    let session = SessionManager::restore(store.clone()).await;
    (store, session)
}

async fn mock_read(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", path)
        .match_header("authorization", "tok-1")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn previous_snapshot() -> UserSnapshot {
    UserSnapshot {
        profile: Profile {
            id: "old-user".to_string(),
            display_name: Some("Old User".to_string()),
            images: Vec::new(),
        },
        top_tracks: Vec::new(),
        top_artists: Vec::new(),
        playlists: Vec::new(),
    }
}

#[tokio::test]
async fn full_sync_merges_four_responses() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = [
        mock_read(&mut server, "/api/user/profile", 200, PROFILE_BODY).await,
        mock_read(&mut server, "/api/user/top-tracks", 200, TRACKS_BODY).await,
        mock_read(&mut server, "/api/user/top-artists", 200, EMPTY_ITEMS).await,
        // The backend may omit `items` entirely; that still means "empty list"
        mock_read(&mut server, "/api/user/playlists", 200, "{}").await,
    ];

    let dir = TempDir::new().unwrap();
    let (_, session) = authed_session(&dir).await;
    let client = BackendClient::new(server.url());

    let snapshot = management::sync_user_data(&client, &session).await.unwrap();

    assert_eq!(snapshot.profile.id, "user-1");
    assert_eq!(snapshot.profile.display_name.as_deref(), Some("Test User"));

    assert_eq!(snapshot.top_tracks.len(), 1);
    let track = &snapshot.top_tracks[0];
    assert_eq!(track.name, "Song A");
    assert_eq!(track.artists.len(), 1);
    assert_eq!(track.artists[0].name, "Artist X");
    assert_eq!(track.external_urls.spotify.as_deref(), Some("u1"));

    assert!(snapshot.top_artists.is_empty());
    assert!(snapshot.playlists.is_empty());

    // The committed snapshot is the one exposed to readers
    assert_eq!(session.snapshot().await, Some(snapshot));
    assert_eq!(session.last_error().await, None);
}

#[tokio::test]
async fn unauthorized_on_any_read_forces_logout() {
    for failing_path in USER_PATHS {
        let mut server = mockito::Server::new_async().await;
        let mut mocks = Vec::new();
        for path in USER_PATHS {
            if path == failing_path {
                mocks.push(mock_read(&mut server, path, 401, r#"{"error": "Invalid token"}"#).await);
            } else {
                mocks.push(mock_read(&mut server, path, 200, EMPTY_ITEMS).await);
            }
        }

        let dir = TempDir::new().unwrap();
        let (store, session) = authed_session(&dir).await;
        let client = BackendClient::new(server.url());

        match management::sync_user_data(&client, &session).await {
            Err(ApiError::Unauthorized) => {}
            other => panic!(
                "expected Unauthorized for failing {failing_path}, got {:?}",
                other
            ),
        }

        // Symmetric across all four endpoints: session gone, token gone
        assert_eq!(session.state().await, SessionState::Anonymous);
        assert_eq!(session.snapshot().await, None);
        assert_eq!(store.get(ACCESS_TOKEN_KEY).await, None);
        assert!(session.last_error().await.unwrap().contains("expired"));
    }
}

#[tokio::test]
async fn non_auth_failure_keeps_session_and_previous_snapshot() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = [
        mock_read(&mut server, "/api/user/profile", 200, PROFILE_BODY).await,
        mock_read(&mut server, "/api/user/top-tracks", 200, EMPTY_ITEMS).await,
        mock_read(&mut server, "/api/user/top-artists", 200, EMPTY_ITEMS).await,
        mock_read(
            &mut server,
            "/api/user/playlists",
            500,
            r#"{"error": "upstream exploded"}"#,
        )
        .await,
    ];

    let dir = TempDir::new().unwrap();
    let (store, session) = authed_session(&dir).await;
    session.replace_snapshot(previous_snapshot()).await;
    let client = BackendClient::new(server.url());

    match management::sync_user_data(&client, &session).await {
        Err(ApiError::FetchFailed(reason)) => assert!(reason.contains("upstream exploded")),
        other => panic!("expected FetchFailed, got {:?}", other),
    }

    // Session untouched, previous snapshot retained, error surfaced
    assert!(matches!(
        session.state().await,
        SessionState::Authenticated(_)
    ));
    assert_eq!(session.snapshot().await, Some(previous_snapshot()));
    assert_eq!(store.get(ACCESS_TOKEN_KEY).await, Some("tok-1".to_string()));
    assert!(
        session
            .last_error()
            .await
            .unwrap()
            .contains("upstream exploded")
    );
}

#[tokio::test]
async fn sync_requires_a_token() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_root(dir.path().join("session"));
    let session = SessionManager::new(store);
    let client = BackendClient::new("http://127.0.0.1:1");

    match management::sync_user_data(&client, &session).await {
        Err(ApiError::FetchFailed(reason)) => assert!(reason.contains("no access token")),
        other => panic!("expected FetchFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn successful_sync_replaces_snapshot_and_clears_error() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = [
        mock_read(&mut server, "/api/user/profile", 200, PROFILE_BODY).await,
        mock_read(&mut server, "/api/user/top-tracks", 200, EMPTY_ITEMS).await,
        mock_read(&mut server, "/api/user/top-artists", 200, EMPTY_ITEMS).await,
        mock_read(&mut server, "/api/user/playlists", 200, EMPTY_ITEMS).await,
    ];

    let dir = TempDir::new().unwrap();
    let (_, session) = authed_session(&dir).await;
    session.replace_snapshot(previous_snapshot()).await;
    session.set_error("stale error from an earlier attempt").await;
    let client = BackendClient::new(server.url());

    let snapshot = management::sync_user_data(&client, &session).await.unwrap();
    assert_eq!(snapshot.profile.id, "user-1");
    assert_eq!(session.snapshot().await, Some(snapshot));
    assert_eq!(session.last_error().await, None);
}
