//! Artist endpoints.

use crate::{
    Result, Spotify,
    model::{
        Album, Artist, ArtistId, Artists as ArtistsPayload, Page, Track,
        track::Tracks as TracksPayload,
    },
};
use std::sync::Arc;
use tracing::debug;

/// Manager for the artist endpoints.
pub struct Artists<'a>(pub(crate) &'a Spotify);

impl Artists<'_> {
    /// Get catalog information for a single artist.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-an-artist)
    pub async fn get(&self, id: ArtistId, force: bool) -> Result<Arc<Artist>> {
        if !force && let Some(artist) = self.0.cache().artist(&id) {
            debug!(%id, "artist cache hit");
            return Ok(artist);
        }
        let result = self.0.api_get(&format!("artists/{}", id.id()), &[]).await?;
        Ok(self.0.cache().store_artist(Spotify::convert(&result)?))
    }

    /// Get catalog information for several artists at once. Unknown IDs are
    /// dropped from the result.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-multiple-artists)
    pub async fn get_several(&self, ids: &[ArtistId]) -> Result<Vec<Arc<Artist>>> {
        let ids = ArtistId::join_ids(ids);
        let result = self
            .0
            .api_get("artists", &[("ids", Some(ids.as_str()))])
            .await?;
        let payload: ArtistsPayload = Spotify::convert(&result)?;
        Ok(payload
            .artists
            .into_iter()
            .flatten()
            .map(|artist| self.0.cache().store_artist(artist))
            .collect())
    }

    /// Get a page of an artist's discography (simplified album objects).
    ///
    /// `include_groups` filters by relationship, e.g. `"album,single"`.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-albums)
    pub async fn albums(
        &self,
        id: ArtistId,
        include_groups: Option<&str>,
        market: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<Album>> {
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                &format!("artists/{}/albums", id.id()),
                &[
                    ("include_groups", include_groups),
                    ("market", market),
                    ("limit", limit.as_deref()),
                    ("offset", offset.as_deref()),
                ],
            )
            .await?;
        let page: Page<Album> = Spotify::convert(&result)?;
        for album in &page.items {
            self.0.cache().store_album(album.clone());
        }
        Ok(page)
    }

    /// Get an artist's top tracks in the given market.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-top-tracks)
    pub async fn top_tracks(&self, id: ArtistId, market: &str) -> Result<Vec<Arc<Track>>> {
        let result = self
            .0
            .api_get(
                &format!("artists/{}/top-tracks", id.id()),
                &[("market", Some(market))],
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

    /// Get artists similar to the given one.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-an-artists-related-artists)
    pub async fn related(&self, id: ArtistId) -> Result<Vec<Arc<Artist>>> {
        let result = self
            .0
            .api_get(&format!("artists/{}/related-artists", id.id()), &[])
            .await?;
        let payload: ArtistsPayload = Spotify::convert(&result)?;
        Ok(payload
            .artists
            .into_iter()
            .flatten()
            .map(|artist| self.0.cache().store_artist(artist))
            .collect())
    }
}
