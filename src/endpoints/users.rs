//! User profile endpoints.

use crate::{
    Result, Spotify,
    model::{PlaylistId, PrivateUser, PublicUser, UserId},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

/// Manager for the user endpoints.
pub struct Users<'a>(pub(crate) &'a Spotify);

impl Users<'_> {
    /// Get the profile of the authenticated user.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-current-users-profile)
    pub async fn me(&self) -> Result<PrivateUser> {
        let result = self.0.api_get("me", &[]).await?;
        Spotify::convert(&result)
    }

    /// Get a user's public profile.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-users-profile)
    pub async fn get(&self, id: &UserId, force: bool) -> Result<Arc<PublicUser>> {
        if !force && let Some(user) = self.0.cache().user(id) {
            debug!(%id, "user cache hit");
            return Ok(user);
        }
        let result = self.0.api_get(&format!("users/{}", id.id()), &[]).await?;
        Ok(self.0.cache().store_user(Spotify::convert(&result)?))
    }

    /// Follow a playlist as the authenticated user.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/follow-playlist)
    pub async fn follow_playlist(&self, id: PlaylistId, public: bool) -> Result<()> {
        self.0
            .api_put(
                &format!("playlists/{}/followers", id.id()),
                &json!({ "public": public }),
            )
            .await
    }

    /// Stop following a playlist as the authenticated user.
    ///
    /// [Reference](https://developer.spotify.com/documentation/web-api/reference/unfollow-playlist)
    pub async fn unfollow_playlist(&self, id: PlaylistId) -> Result<()> {
        self.0
            .api_delete(&format!("playlists/{}/followers", id.id()), &Value::Null)
            .await?;
        Ok(())
    }
}
