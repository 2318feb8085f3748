//! All objects related to tracks.

use super::{
    Album, Artist, ExternalIds, ExternalUrls, Restriction, TrackId, Type,
    custom_serde::duration_ms,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Track object, hydrated from either the full or the simplified payload.
///
/// A simplified track (inside an album's track listing) has no `album` and
/// no `popularity`; a relinked track carries `linked_from`; a local file
/// has no catalog `id` at all.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Track {
    #[serde(default)]
    pub album: Option<Album>,
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    /// Usually 1 unless the album consists of more than one disc.
    pub disc_number: u32,
    #[serde(with = "duration_ms", rename = "duration_ms")]
    pub duration: Duration,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub id: Option<TrackId>,
    #[serde(default)]
    pub is_local: bool,
    /// Part of the response when track relinking is applied.
    #[serde(default)]
    pub is_playable: Option<bool>,
    #[serde(default)]
    pub linked_from: Option<LinkedTrack>,
    pub name: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub restrictions: Option<Restriction>,
    /// The number on the track's disc.
    pub track_number: u32,
    #[serde(default)]
    pub uri: Option<String>,
    // Full-object fields.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    /// Between 0 and 100, with 100 being the most popular.
    #[serde(default)]
    pub popularity: Option<u32>,
}

impl Track {
    /// First credited artist, which the API lists as the primary one.
    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }
}

/// The originally requested track when relinking substituted a playable
/// one.
///
/// [Reference](https://developer.spotify.com/documentation/web-api/concepts/track-relinking)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LinkedTrack {
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub id: Option<TrackId>,
    #[serde(rename = "type")]
    pub kind: Type,
    pub uri: String,
}

/// Wrapper for the several-tracks endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Tracks {
    pub tracks: Vec<Option<Track>>,
}

/// Entry of the user's saved-tracks library.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SavedTrack {
    pub added_at: DateTime<Utc>,
    pub track: Track,
}

/// Audio feature analysis for one track.
///
/// [Reference](https://developer.spotify.com/documentation/web-api/reference/get-audio-features)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AudioFeatures {
    pub acousticness: f32,
    pub analysis_url: String,
    pub danceability: f32,
    #[serde(with = "duration_ms", rename = "duration_ms")]
    pub duration: Duration,
    pub energy: f32,
    pub id: TrackId,
    pub instrumentalness: f32,
    /// Pitch-class notation, -1 when undetected.
    pub key: i32,
    pub liveness: f32,
    pub loudness: f32,
    /// 1 for major, 0 for minor.
    pub mode: i32,
    pub speechiness: f32,
    pub tempo: f32,
    pub time_signature: i32,
    pub track_href: String,
    pub uri: String,
    pub valence: f32,
}

/// Wrapper for the several-audio-features endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct AudioFeaturesPayload {
    pub audio_features: Vec<Option<AudioFeatures>>,
}
