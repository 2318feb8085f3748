//! All objects related to playlists.

use super::{
    Episode, ExternalUrls, Followers, Image, Page, PlaylistId, PublicUser, Track,
    custom_serde::null_as_default,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist object, hydrated from either the full or the simplified
/// payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    pub collaborative: bool,
    #[serde(default)]
    pub description: Option<String>,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub href: Option<String>,
    pub id: PlaylistId,
    /// The API nulls this field for playlists without cover art.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PublicUser,
    /// `None` when the playlist status is not relevant (e.g. search
    /// results).
    #[serde(default)]
    pub public: Option<bool>,
    /// Version identifier of the current playlist contents.
    pub snapshot_id: String,
    pub tracks: PlaylistTracks,
    pub uri: String,
}

impl Playlist {
    pub fn total_tracks(&self) -> u32 {
        self.tracks.total()
    }
}

/// The `tracks` field differs between payloads: the full object inlines the
/// first page of items, the simplified one only references it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PlaylistTracks {
    Page(Page<PlaylistItem>),
    Reference(PlaylistTracksRef),
}

impl PlaylistTracks {
    pub fn total(&self) -> u32 {
        match self {
            Self::Page(page) => page.total,
            Self::Reference(re) => re.total,
        }
    }

    /// Inlined first page of items, when the payload carried one.
    pub fn items(&self) -> &[PlaylistItem] {
        match self {
            Self::Page(page) => &page.items,
            Self::Reference(_) => &[],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTracksRef {
    #[serde(default)]
    pub href: Option<String>,
    pub total: u32,
}

/// One row of a playlist: the playable item plus addition metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlaylistItem {
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub added_by: Option<PublicUser>,
    #[serde(default)]
    pub is_local: bool,
    /// `None` for rows whose item is no longer available.
    #[serde(default)]
    pub track: Option<PlayableItem>,
}

/// Playlists mix tracks and podcast episodes; the variants are told apart
/// by their distinct required fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PlayableItem {
    Track(Track),
    Episode(Episode),
}

impl PlayableItem {
    pub fn name(&self) -> &str {
        match self {
            Self::Track(track) => &track.name,
            Self::Episode(episode) => &episode.name,
        }
    }

    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Track(track) => track.uri.as_deref(),
            Self::Episode(episode) => Some(&episode.uri),
        }
    }
}

/// Playlist snapshot version, returned by the mutation endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotId {
    pub snapshot_id: String,
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.snapshot_id)
    }
}

/// Body of the create and edit playlist endpoints.
#[derive(Clone, Debug, Serialize, Default, PartialEq, Eq)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaylistDetails {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
