//! Episode endpoints.

use crate::{
    Result, Spotify,
    model::{
        Episode, EpisodeId,
        episode::Episodes as EpisodesPayload,
    },
};
use std::sync::Arc;
use tracing::debug;

/// Manager for the episode endpoints.
pub struct Episodes<'a>(pub(crate) &'a Spotify);

impl Episodes<'_> {
    /// Get catalog information for a single episode. The full object
    /// embeds its parent show, which lands in the cache as well.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-an-episode)
    pub async fn get(
        &self,
        id: EpisodeId,
        market: Option<&str>,
        force: bool,
    ) -> Result<Arc<Episode>> {
        if !force && let Some(episode) = self.0.cache().episode(&id) {
            debug!(%id, "episode cache hit");
            return Ok(episode);
        }
        let result = self
            .0
            .api_get(&format!("episodes/{}", id.id()), &[("market", market)])
            .await?;
        Ok(self.0.cache().store_episode(Spotify::convert(&result)?))
    }

    /// Get catalog information for several episodes at once. Unknown IDs
    /// are dropped from the result.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-multiple-episodes)
    pub async fn get_several(
        &self,
        ids: &[EpisodeId],
        market: Option<&str>,
    ) -> Result<Vec<Arc<Episode>>> {
        let ids = EpisodeId::join_ids(ids);
        let result = self
            .0
            .api_get(
                "episodes",
                &[("ids", Some(ids.as_str())), ("market", market)],
            )
            .await?;
        let payload: EpisodesPayload = Spotify::convert(&result)?;
        Ok(payload
            .episodes
            .into_iter()
            .flatten()
            .map(|episode| self.0.cache().store_episode(episode))
            .collect())
    }
}
