use crate::{
    backend::client::BackendClient,
    error::ApiError,
    types::{ItemsPage, Playlist, Profile, TopArtist, TopTrack},
};

impl BackendClient {
    pub async fn profile(&self, token: &str) -> Result<Profile, ApiError> {
        self.get_json("/api/user/profile", Some(token)).await
    }

    pub async fn top_tracks(&self, token: &str) -> Result<Vec<TopTrack>, ApiError> {
        let page: ItemsPage<TopTrack> = self.get_json("/api/user/top-tracks", Some(token)).await?;
        Ok(page.items)
    }

    pub async fn top_artists(&self, token: &str) -> Result<Vec<TopArtist>, ApiError> {
        let page: ItemsPage<TopArtist> =
            self.get_json("/api/user/top-artists", Some(token)).await?;
        Ok(page.items)
    }

    pub async fn playlists(&self, token: &str) -> Result<Vec<Playlist>, ApiError> {
        let page: ItemsPage<Playlist> = self.get_json("/api/user/playlists", Some(token)).await?;
        Ok(page.items)
    }
}
