//! Show endpoints.

use crate::{
    Result, Spotify,
    model::{
        Episode, Page, SavedShow, Show, ShowId,
        show::Shows as ShowsPayload,
    },
};
use std::sync::Arc;
use tracing::debug;

/// Manager for the show endpoints.
pub struct Shows<'a>(pub(crate) &'a Spotify);

impl Shows<'_> {
    /// Get catalog information for a single show.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-a-show)
    pub async fn get(
        &self,
        id: ShowId,
        market: Option<&str>,
        force: bool,
    ) -> Result<Arc<Show>> {
        if !force && let Some(show) = self.0.cache().show(&id) {
            debug!(%id, "show cache hit");
            return Ok(show);
        }
        let result = self
            .0
            .api_get(&format!("shows/{}", id.id()), &[("market", market)])
            .await?;
        Ok(self.0.cache().store_show(Spotify::convert(&result)?))
    }

    /// Get catalog information for several shows at once (simplified show
    /// objects). Unknown IDs are dropped from the result.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-multiple-shows)
    pub async fn get_several(
        &self,
        ids: &[ShowId],
        market: Option<&str>,
    ) -> Result<Vec<Arc<Show>>> {
        let ids = ShowId::join_ids(ids);
        let result = self
            .0
            .api_get(
                "shows",
                &[("ids", Some(ids.as_str())), ("market", market)],
            )
            .await?;
        let payload: ShowsPayload = Spotify::convert(&result)?;
        Ok(payload
            .shows
            .into_iter()
            .flatten()
            .map(|show| self.0.cache().store_show(show))
            .collect())
    }

    /// Get a page of a show's episodes (simplified episode objects).
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-a-shows-episodes)
    pub async fn episodes(
        &self,
        id: ShowId,
        market: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<Episode>> {
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                &format!("shows/{}/episodes", id.id()),
                &[
                    ("market", market),
                    ("limit", limit.as_deref()),
                    ("offset", offset.as_deref()),
                ],
            )
            .await?;
        let page: Page<Episode> = Spotify::convert(&result)?;
        for episode in &page.items {
            self.0.cache().store_episode(episode.clone());
        }
        Ok(page)
    }

    /// Get a page of the shows saved in the current user's library.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-users-saved-shows)
    pub async fn saved(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<SavedShow>> {
        let limit = limit.map(|s| s.to_string());
        let offset = offset.map(|s| s.to_string());
        let result = self
            .0
            .api_get(
                "me/shows",
                &[("limit", limit.as_deref()), ("offset", offset.as_deref())],
            )
            .await?;
        let page: Page<SavedShow> = Spotify::convert(&result)?;
        for saved in &page.items {
            self.0.cache().store_show(saved.show.clone());
        }
        Ok(page)
    }
}
