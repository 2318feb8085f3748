//! Playlist endpoints.

use crate::{
    Result, Spotify,
    model::{
        Page, PlayableItem, Playlist, PlaylistDetails, PlaylistId, PlaylistItem, SnapshotId,
        UserId,
    },
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Manager for the playlist endpoints.
pub struct Playlists<'a>(pub(crate) &'a Spotify);

impl Playlists<'_> {
    /// Get a playlist owned by a user.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-playlist)
    pub async fn get(
        &self,
        id: PlaylistId,
        market: Option<&str>,
        force: bool,
    ) -> Result<Arc<Playlist>> {
        if !force && let Some(playlist) = self.0.cache().playlist(&id) {
            debug!(%id, "playlist cache hit");
            return Ok(playlist);
        }
        let result = self
            .0
            .api_get(&format!("playlists/{}", id.id()), &[("market", market)])
            .await?;
        Ok(self.0.cache().store_playlist(Spotify::convert(&result)?))
    }

    /// Get full details of the items of a playlist.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-playlists-tracks)
    pub async fn items(
        &self,
        id: PlaylistId,
        fields: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<PlaylistItem>> {
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                &format!("playlists/{}/tracks", id.id()),
                &[
                    ("fields", fields),
                    ("limit", limit.as_deref()),
                    ("offset", offset.as_deref()),
                ],
            )
            .await?;
        let page: Page<PlaylistItem> = Spotify::convert(&result)?;
        for item in &page.items {
            match &item.track {
                Some(PlayableItem::Track(track)) => {
                    self.0.cache().store_track(track.clone());
                }
                Some(PlayableItem::Episode(episode)) => {
                    self.0.cache().store_episode(episode.clone());
                }
                None => {}
            }
        }
        Ok(page)
    }

    /// Create an empty playlist for a user. Requires a user-authorized
    /// token.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/create-playlist)
    pub async fn create(
        &self,
        user_id: &UserId,
        details: &PlaylistDetails,
    ) -> Result<Arc<Playlist>> {
        let result = self
            .0
            .api_post(
                &format!("users/{}/playlists", user_id.id()),
                &serde_json::to_value(details)?,
            )
            .await?;
        Ok(self.0.cache().store_playlist(Spotify::convert(&result)?))
    }

    /// Change a playlist's name and visibility details. Requires a
    /// user-authorized token.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/change-playlist-details)
    pub async fn edit(&self, id: PlaylistId, details: &PlaylistDetails) -> Result<()> {
        self.0
            .api_put(
                &format!("playlists/{}", id.id()),
                &serde_json::to_value(details)?,
            )
            .await
    }

    /// Add items to a playlist by URI, appending unless a position is
    /// given. Returns the new snapshot ID.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/add-tracks-to-playlist)
    pub async fn add_items(
        &self,
        id: PlaylistId,
        uris: &[&str],
        position: Option<u32>,
    ) -> Result<SnapshotId> {
        let mut payload = json!({ "uris": uris });
        if let Some(position) = position {
            payload["position"] = json!(position);
        }
        let result = self
            .0
            .api_post(&format!("playlists/{}/tracks", id.id()), &payload)
            .await?;
        Spotify::convert(&result)
    }

    /// Remove all occurrences of the given items from a playlist. Returns
    /// the new snapshot ID.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/remove-tracks-playlist)
    pub async fn remove_items(&self, id: PlaylistId, uris: &[&str]) -> Result<SnapshotId> {
        let tracks = uris.iter().map(|uri| json!({ "uri": uri })).collect::<Vec<_>>();
        let result = self
            .0
            .api_delete(
                &format!("playlists/{}/tracks", id.id()),
                &json!({ "tracks": tracks }),
            )
            .await?;
        Spotify::convert(&result)
    }

    /// Get a page of the current user's playlists (owned and followed).
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-a-list-of-current-users-playlists)
    pub async fn current_users(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<Playlist>> {
        self.page_of("me/playlists", limit, offset).await
    }

    /// Get a page of the playlists owned or followed by a user.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-list-users-playlists)
    pub async fn users(
        &self,
        user_id: &UserId,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<Playlist>> {
        self.page_of(&format!("users/{}/playlists", user_id.id()), limit, offset)
            .await
    }

    async fn page_of(
        &self,
        path: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<Playlist>> {
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                path,
                &[("limit", limit.as_deref()), ("offset", offset.as_deref())],
            )
            .await?;
        let page: Page<Playlist> = Spotify::convert(&result)?;
        for playlist in &page.items {
            self.0.cache().store_playlist(playlist.clone());
        }
        Ok(page)
    }
}
