//! All objects related to episodes.

use super::{
    EpisodeId, ExternalUrls, Image, ReleaseDatePrecision, Restriction, Show, ShowId,
    custom_serde::duration_ms, parse_release_date,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Episode object, hydrated from either the full or the simplified payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    #[serde(default)]
    pub audio_preview_url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub html_description: Option<String>,
    #[serde(with = "duration_ms", rename = "duration_ms")]
    pub duration: Duration,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    pub id: EpisodeId,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub is_externally_hosted: bool,
    #[serde(default)]
    pub is_playable: Option<bool>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    #[serde(default)]
    pub restrictions: Option<Restriction>,
    /// Present when the episode was fetched with a user token that has the
    /// playback-position scope.
    #[serde(default)]
    pub resume_point: Option<ResumePoint>,
    pub uri: String,
    /// The show the episode belongs to, present on the full object only.
    #[serde(default)]
    pub show: Option<Box<Show>>,
}

impl Episode {
    /// The release date resolved against its precision.
    pub fn release_date(&self) -> Option<NaiveDate> {
        parse_release_date(&self.release_date, self.release_date_precision)
    }

    /// ID of the parent show, when the payload embedded it.
    pub fn show_id(&self) -> Option<ShowId> {
        self.show.as_ref().map(|show| show.id)
    }
}

/// Wrapper for the several-episodes endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Episodes {
    pub episodes: Vec<Option<Episode>>,
}

/// The user's most recent position in an episode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResumePoint {
    pub fully_played: bool,
    #[serde(with = "duration_ms", rename = "resume_position_ms")]
    pub resume_position: Duration,
}
