use crate::{
    backend::BackendClient,
    error::ApiError,
    management::session::SessionManager,
    types::{TimelineSnapshot, UserSnapshot},
};

const SESSION_EXPIRED: &str = "Session expired. Run `tunescope auth` to sign in again.";

/// Fetches the four user-data reads concurrently and commits them as one
/// atomic snapshot.
///
/// All four futures are joined before anything is committed, so no partial
/// snapshot is ever observable. An unauthorized signal on any read wins over
/// other failures and resolves through [`SessionManager::logout`], which also
/// clears the persisted token. A non-auth failure sets the current error and
/// leaves the session and the previous snapshot untouched.
pub async fn sync_user_data(
    client: &BackendClient,
    session: &SessionManager,
) -> Result<UserSnapshot, ApiError> {
    let token = match session.token().await {
        Some(token) if !token.is_empty() => token,
        _ => return Err(ApiError::FetchFailed("no access token".to_string())),
    };

    let (profile, top_tracks, top_artists, playlists) = tokio::join!(
        client.profile(&token),
        client.top_tracks(&token),
        client.top_artists(&token),
        client.playlists(&token),
    );

    let snapshot = match (profile, top_tracks, top_artists, playlists) {
        (Ok(profile), Ok(top_tracks), Ok(top_artists), Ok(playlists)) => UserSnapshot {
            profile,
            top_tracks,
            top_artists,
            playlists,
        },
        (profile, top_tracks, top_artists, playlists) => {
            let errors: Vec<ApiError> = [
                profile.err(),
                top_tracks.err(),
                top_artists.err(),
                playlists.err(),
            ]
            .into_iter()
            .flatten()
            .collect();

            if errors.iter().any(|e| e.is_unauthorized()) {
                session.logout().await;
                session.set_error(SESSION_EXPIRED).await;
                return Err(ApiError::Unauthorized);
            }

            let err = errors
                .into_iter()
                .next()
                .unwrap_or_else(|| ApiError::FetchFailed("unknown fetch failure".to_string()));
            session.set_error(&err.to_string()).await;
            return Err(err);
        }
    };

    session.replace_snapshot(snapshot.clone()).await;
    Ok(snapshot)
}

/// Fetches the pre-aggregated listening timeline as one whole snapshot.
///
/// Advisory-only with respect to the session: an unauthorized response
/// propagates to the caller without mutating session state, keeping a single
/// write path for session invalidation through the aggregator.
pub async fn fetch_timeline(
    client: &BackendClient,
    session: &SessionManager,
) -> Result<TimelineSnapshot, ApiError> {
    let token = match session.token().await {
        Some(token) if !token.is_empty() => token,
        _ => return Err(ApiError::FetchFailed("no access token".to_string())),
    };

    client.timeline(&token).await
}
