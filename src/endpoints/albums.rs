//! Album endpoints.

use crate::{
    Result, Spotify,
    model::{
        Album, AlbumId, Page, SavedAlbum, Track,
        album::Albums as AlbumsPayload,
    },
};
use std::sync::Arc;
use tracing::debug;

/// Manager for the album endpoints.
pub struct Albums<'a>(pub(crate) &'a Spotify);

impl Albums<'_> {
    /// Get catalog information for a single album.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-an-album)
    pub async fn get(
        &self,
        id: AlbumId,
        market: Option<&str>,
        force: bool,
    ) -> Result<Arc<Album>> {
        if !force && let Some(album) = self.0.cache().album(&id) {
            debug!(%id, "album cache hit");
            return Ok(album);
        }
        let result = self
            .0
            .api_get(&format!("albums/{}", id.id()), &[("market", market)])
            .await?;
        Ok(self.0.cache().store_album(Spotify::convert(&result)?))
    }

    /// Get catalog information for several albums at once. Unknown IDs are
    /// dropped from the result.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-multiple-albums)
    pub async fn get_several(
        &self,
        ids: &[AlbumId],
        market: Option<&str>,
    ) -> Result<Vec<Arc<Album>>> {
        let ids = AlbumId::join_ids(ids);
        let result = self
            .0
            .api_get(
                "albums",
                &[("ids", Some(ids.as_str())), ("market", market)],
            )
            .await?;
        let payload: AlbumsPayload = Spotify::convert(&result)?;
        Ok(payload
            .albums
            .into_iter()
            .flatten()
            .map(|album| self.0.cache().store_album(album))
            .collect())
    }

    /// Get a page of an album's tracks (simplified track objects).
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-an-albums-tracks)
    pub async fn tracks(
        &self,
        id: AlbumId,
        market: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<Track>> {
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                &format!("albums/{}/tracks", id.id()),
                &[
                    ("market", market),
                    ("limit", limit.as_deref()),
                    ("offset", offset.as_deref()),
                ],
            )
            .await?;
        let page: Page<Track> = Spotify::convert(&result)?;
        for track in &page.items {
            self.0.cache().store_track(track.clone());
        }
        Ok(page)
    }

    /// Get a page of the albums saved in the current user's library.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-users-saved-albums)
    pub async fn saved(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<SavedAlbum>> {
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                "me/albums",
                &[("limit", limit.as_deref()), ("offset", offset.as_deref())],
            )
            .await?;
        let page: Page<SavedAlbum> = Spotify::convert(&result)?;
        for saved in &page.items {
            self.0.cache().store_album(saved.album.clone());
        }
        Ok(page)
    }
}
