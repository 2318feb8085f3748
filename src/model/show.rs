//! All objects related to shows (podcasts).

use super::{Copyright, Episode, ExternalUrls, Image, Page, ShowId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Show object, hydrated from either the full or the simplified payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Show {
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    pub description: String,
    #[serde(default)]
    pub html_description: Option<String>,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    pub id: ShowId,
    #[serde(default)]
    pub images: Vec<Image>,
    /// `None` when Spotify couldn't determine hosting.
    #[serde(default)]
    pub is_externally_hosted: Option<bool>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    pub name: String,
    pub publisher: String,
    #[serde(default)]
    pub total_episodes: Option<u32>,
    pub uri: String,
    /// First page of the show's episodes, present on the full object only.
    #[serde(default)]
    pub episodes: Option<Page<Episode>>,
}

/// Wrapper for the several-shows endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Shows {
    pub shows: Vec<Option<Show>>,
}

/// Entry of the user's saved-shows library.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SavedShow {
    pub added_at: DateTime<Utc>,
    pub show: Show,
}
