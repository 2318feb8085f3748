//! Track endpoints.

use crate::{
    Result, Spotify,
    model::{
        AudioFeatures, Page, SavedTrack, Track, TrackId,
        track::{AudioFeaturesPayload, Tracks as TracksPayload},
    },
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Manager for the track endpoints.
pub struct Tracks<'a>(pub(crate) &'a Spotify);

impl Tracks<'_> {
    /// Get catalog information for a single track.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-track)
    pub async fn get(
        &self,
        id: TrackId,
        market: Option<&str>,
        force: bool,
    ) -> Result<Arc<Track>> {
        if !force && let Some(track) = self.0.cache().track(&id) {
            debug!(%id, "track cache hit");
            return Ok(track);
        }
        let result = self
            .0
            .api_get(&format!("tracks/{}", id.id()), &[("market", market)])
            .await?;
        Ok(self.0.cache().store_track(Spotify::convert(&result)?))
    }

    /// Get catalog information for several tracks at once. Unknown IDs are
    /// dropped from the result.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-several-tracks)
    pub async fn get_several(
        &self,
        ids: &[TrackId],
        market: Option<&str>,
    ) -> Result<Vec<Arc<Track>>> {
        let ids = TrackId::join_ids(ids);
        let result = self
            .0
            .api_get(
                "tracks",
                &[("ids", Some(ids.as_str())), ("market", market)],
            )
            .await?;
        let payload: TracksPayload = Spotify::convert(&result)?;
        Ok(payload
            .tracks
            .into_iter()
            .flatten()
            .map(|track| self.0.cache().store_track(track))
            .collect())
    }

    /// Get the audio feature analysis for a track.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-audio-features)
    pub async fn audio_features(&self, id: TrackId) -> Result<AudioFeatures> {
        let result = self
            .0
            .api_get(&format!("audio-features/{}", id.id()), &[])
            .await?;
        Spotify::convert(&result)
    }

    /// Get audio features for several tracks at once.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-several-audio-features)
    pub async fn audio_features_several(
        &self,
        ids: &[TrackId],
    ) -> Result<Vec<AudioFeatures>> {
        let ids = TrackId::join_ids(ids);
        let result = self
            .0
            .api_get("audio-features", &[("ids", Some(ids.as_str()))])
            .await?;
        let payload: AudioFeaturesPayload = Spotify::convert(&result)?;
        Ok(payload.audio_features.into_iter().flatten().collect())
    }

    /// Get a page of the songs saved in the current user's library.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-users-saved-tracks)
    pub async fn saved(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<SavedTrack>> {
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                "me/tracks",
                &[("limit", limit.as_deref()), ("offset", offset.as_deref())],
            )
            .await?;
        let page: Page<SavedTrack> = Spotify::convert(&result)?;
        for saved in &page.items {
            self.0.cache().store_track(saved.track.clone());
        }
        Ok(page)
    }

    /// Save one or more tracks to the current user's library.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/save-tracks-user)
    pub async fn save(&self, ids: &[TrackId]) -> Result<()> {
        self.0
            .api_put(
                &format!("me/tracks?ids={}", TrackId::join_ids(ids)),
                &Value::Null,
            )
            .await
    }

    /// Remove one or more tracks from the current user's library.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/remove-tracks-user)
    pub async fn remove_saved(&self, ids: &[TrackId]) -> Result<()> {
        self.0
            .api_delete(
                &format!("me/tracks?ids={}", TrackId::join_ids(ids)),
                &Value::Null,
            )
            .await?;
        Ok(())
    }

    /// Check if one or more tracks are already saved by the user.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/check-users-saved-tracks)
    pub async fn contains_saved(&self, ids: &[TrackId]) -> Result<Vec<bool>> {
        let ids = TrackId::join_ids(ids);
        let result = self
            .0
            .api_get("me/tracks/contains", &[("ids", Some(ids.as_str()))])
            .await?;
        Spotify::convert(&result)
    }
}
