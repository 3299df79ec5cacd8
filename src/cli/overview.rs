use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    backend::BackendClient,
    error,
    management::{self, SessionManager, SessionStore},
    success,
    types::{ArtistTableRow, PlaylistTableRow, TrackTableRow, UserSnapshot},
    utils, warning,
};

pub async fn overview() {
    let client = BackendClient::from_env();
    if let Err(e) = client.ping().await {
        warning!(
            "{}. Check that the backend is running at {}.",
            e,
            client.base_url()
        );
    }

    let session = SessionManager::restore(SessionStore::new()).await;
    if session.token().await.is_none() {
        error!("Not authenticated. Run tunescope auth first.");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Syncing listening data...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match management::sync_user_data(&client, &session).await {
        Ok(snapshot) => {
            pb.finish_and_clear();
            render(&snapshot);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    }
}

fn render(snapshot: &UserSnapshot) {
    match &snapshot.profile.display_name {
        Some(name) => success!("Signed in as {} ({})", name, snapshot.profile.id),
        None => success!("Signed in ({})", snapshot.profile.id),
    }

    let track_rows: Vec<TrackTableRow> = snapshot
        .top_tracks
        .iter()
        .map(|track| TrackTableRow {
            name: track.name.clone(),
            artists: utils::join_artist_names(&track.artists),
            link: track.external_urls.spotify.clone().unwrap_or_default(),
        })
        .collect();
    println!("\nRecent top tracks\n{}", Table::new(track_rows));

    let artist_rows: Vec<ArtistTableRow> = snapshot
        .top_artists
        .iter()
        .map(|artist| ArtistTableRow {
            name: artist.name.clone(),
            followers: utils::format_count(artist.followers.total),
            link: artist.external_urls.spotify.clone().unwrap_or_default(),
        })
        .collect();
    println!("\nTop artists\n{}", Table::new(artist_rows));

    let playlist_rows: Vec<PlaylistTableRow> = snapshot
        .playlists
        .iter()
        .map(|playlist| PlaylistTableRow {
            name: playlist.name.clone(),
            tracks: playlist.tracks.total,
            link: playlist.external_urls.spotify.clone().unwrap_or_default(),
        })
        .collect();
    println!("\nPlaylists\n{}", Table::new(playlist_rows));
}
