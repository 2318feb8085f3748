//! Search endpoint objects.

use super::{Album, Artist, Episode, Page, Playlist, Show, Track};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Item kinds the search endpoint can be asked for.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
}

impl SearchType {
    /// Comma-joins kinds the way the `type` query parameter expects.
    pub fn join(types: &[Self]) -> String {
        types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Search response: one optional page per requested kind.
///
/// [Reference](https://developer.spotify.com/documentation/web-api/reference/search)
#[derive(Clone, Debug, Deserialize, Default)]
pub struct SearchResult {
    #[serde(default)]
    pub albums: Option<Page<Album>>,
    #[serde(default)]
    pub artists: Option<Page<Artist>>,
    #[serde(default)]
    pub playlists: Option<Page<Playlist>>,
    #[serde(default)]
    pub tracks: Option<Page<Track>>,
    #[serde(default)]
    pub shows: Option<Page<Show>>,
    #[serde(default)]
    pub episodes: Option<Page<Episode>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_types_join_lowercase() {
        assert_eq!(
            SearchType::join(&[SearchType::Track, SearchType::Episode]),
            "track,episode"
        );
    }
}
