//! Search endpoint.

use crate::{
    Result, Spotify,
    model::{SearchResult, SearchType},
};

/// Manager for the search endpoint.
pub struct Search<'a>(pub(crate) &'a Spotify);

impl Search<'_> {
    /// Search the catalog. Returns one page per requested kind; every full
    /// object found is fed into the cache.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/search)
    pub async fn query(
        &self,
        q: &str,
        types: &[SearchType],
        market: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<SearchResult> {
        let types = SearchType::join(types);
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                "search",
                &[
                    ("q", Some(q)),
                    ("type", Some(types.as_str())),
                    ("market", market),
                    ("limit", limit.as_deref()),
                    ("offset", offset.as_deref()),
                ],
            )
            .await?;
        let found: SearchResult = Spotify::convert(&result)?;

        let cache = self.0.cache();
        if let Some(page) = &found.tracks {
            for track in &page.items {
                cache.store_track(track.clone());
            }
        }
        if let Some(page) = &found.albums {
            for album in &page.items {
                cache.store_album(album.clone());
            }
        }
        if let Some(page) = &found.artists {
            for artist in &page.items {
                cache.store_artist(artist.clone());
            }
        }
        if let Some(page) = &found.playlists {
            for playlist in &page.items {
                cache.store_playlist(playlist.clone());
            }
        }
        if let Some(page) = &found.shows {
            for show in &page.items {
                cache.store_show(show.clone());
            }
        }
        if let Some(page) = &found.episodes {
            for episode in &page.items {
                cache.store_episode(episode.clone());
            }
        }
        Ok(found)
    }
}
