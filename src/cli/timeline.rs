use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    backend::BackendClient,
    error,
    error::ApiError,
    info,
    management::{self, SessionManager, SessionStore},
    types::{PeriodStats, TimelineTrackRow},
    warning,
};

pub async fn timeline() {
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
    pb.set_message("Fetching listening timeline...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match management::fetch_timeline(&client, &session).await {
        Ok(snapshot) => {
            pb.finish_and_clear();
            if snapshot.is_empty() {
                info!("No timeline data available yet.");
                return;
            }
            for stats in snapshot.values() {
                render_period(stats);
            }
        }
        Err(ApiError::Unauthorized) => {
            pb.finish_and_clear();
            error!("Session expired. Run tunescope auth to sign in again.");
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    }
}

fn render_period(stats: &PeriodStats) {
    println!();
    info!("{}", stats.label);

    if !stats.top_genres.is_empty() {
        let genres = stats
            .top_genres
            .iter()
            .map(|(genre, count)| format!("{genre} ({count})"))
            .collect::<Vec<String>>()
            .join(", ");
        println!("Top genres: {}", genres);
    }

    println!(
        "Mood: valence {:.2}, energy {:.2}, danceability {:.2}",
        stats.features.valence, stats.features.energy, stats.features.danceability
    );

    let rows: Vec<TimelineTrackRow> = stats
        .tracks
        .iter()
        .map(|track| TimelineTrackRow {
            name: track.name.clone(),
            artists: track.artists.join(", "),
        })
        .collect();
    println!("{}", Table::new(rows));
}
