use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Bearer credential for backend calls. Either absent (unauthenticated) or
/// assumed valid until a call using it is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: AlbumRef,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTracks {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub tracks: PlaylistTracks,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// Generic `{ "items": [...] }` container. The backend may omit `items`
/// entirely, which deserializes as an empty sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Aggregate of the four user-data reads. Built atomically: either all four
/// sub-fetches succeed and the snapshot replaces the previous one, or the
/// previous snapshot is retained.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSnapshot {
    pub profile: Profile,
    pub top_tracks: Vec<TopTrack>,
    pub top_artists: Vec<TopArtist>,
    pub playlists: Vec<Playlist>,
}

/// Per-period average audio profile computed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    #[serde(default)]
    pub valence: f64,
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub danceability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    pub label: String,
    #[serde(default)]
    pub features: AudioFeatures,
    #[serde(default)]
    pub top_genres: Vec<(String, u64)>,
    #[serde(default)]
    pub tracks: Vec<TrackSummary>,
}

/// Mapping from period key ("short_term", ...) to its pre-aggregated stats,
/// in the order the backend emits the periods. Fetched as one atomic read.
pub type TimelineSnapshot = IndexMap<String, PeriodStats>;

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub link: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub followers: String,
    pub link: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: u64,
    pub link: String,
}

#[derive(Tabled)]
pub struct TimelineTrackRow {
    pub name: String,
    pub artists: String,
}
