//! All Spotify API response objects. Please refer to the endpoints where
//! they are used for a link to their reference in the Spotify API
//! documentation.

pub mod album;
pub mod artist;
pub mod custom_serde;
pub mod episode;
pub mod idtypes;
pub mod page;
pub mod playlist;
pub mod search;
pub mod show;
pub mod track;
pub mod user;

pub use album::{Album, AlbumType, SavedAlbum};
pub use artist::{Artist, Artists};
pub use episode::{Episode, ResumePoint};
pub use idtypes::{
    AlbumId, ArtistId, EpisodeId, IdError, PlaylistId, ShowId, TrackId, UserId, parse_uri,
};
pub use page::Page;
pub use playlist::{Playlist, PlaylistDetails, PlaylistItem, PlayableItem, SnapshotId};
pub use search::{SearchResult, SearchType};
pub use show::{SavedShow, Show};
pub use track::{AudioFeatures, LinkedTrack, SavedTrack, Track, Tracks};
pub use user::{ExplicitContent, PrivateUser, PublicUser};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};

/// The object types the API distinguishes, as used in URIs and `type`
/// fields.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Type {
    Artist,
    Album,
    Track,
    Playlist,
    User,
    Show,
    Episode,
}

/// Known external URLs for an object, keyed by provider (`spotify` being
/// the only documented one).
pub type ExternalUrls = HashMap<String, String>;

/// Known external IDs for a track (`isrc`, `ean`, `upc`).
pub type ExternalIds = HashMap<String, String>;

/// Image object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Followers object. The API documents an `href` but always nulls it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Followers {
    pub total: u32,
}

/// Content restriction object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Restriction {
    pub reason: RestrictionReason,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionReason {
    Market,
    Product,
    Explicit,
    #[serde(other)]
    Unknown,
}

/// Copyright statement, on albums and shows.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Copyright {
    pub text: String,
    /// `C` for the copyright, `P` for the performance copyright.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Precision of a `release_date` string.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    Day,
}

/// Resolves a `release_date` string against its precision, defaulting the
/// missing components to the first of the year/month. Returns `None` for
/// values that don't match the advertised precision (local files carry
/// arbitrary strings).
pub(crate) fn parse_release_date(
    date: &str,
    precision: ReleaseDatePrecision,
) -> Option<NaiveDate> {
    let full = match precision {
        ReleaseDatePrecision::Year => format!("{date}-01-01"),
        ReleaseDatePrecision::Month => format!("{date}-01"),
        ReleaseDatePrecision::Day => date.to_owned(),
    };
    NaiveDate::parse_from_str(&full, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_round_trips_through_strings() {
        assert_eq!(Type::Episode.to_string(), "episode");
        assert_eq!("playlist".parse::<Type>().unwrap(), Type::Playlist);
        assert!("bogus".parse::<Type>().is_err());
        assert_eq!(serde_json::to_string(&Type::Track).unwrap(), "\"track\"");
    }

    #[test]
    fn release_dates_respect_precision() {
        assert_eq!(
            parse_release_date("1981", ReleaseDatePrecision::Year),
            NaiveDate::from_ymd_opt(1981, 1, 1)
        );
        assert_eq!(
            parse_release_date("1981-07", ReleaseDatePrecision::Month),
            NaiveDate::from_ymd_opt(1981, 7, 1)
        );
        assert_eq!(
            parse_release_date("1981-07-17", ReleaseDatePrecision::Day),
            NaiveDate::from_ymd_opt(1981, 7, 17)
        );
        assert_eq!(parse_release_date("not a date", ReleaseDatePrecision::Day), None);
    }

    #[test]
    fn unknown_restriction_reasons_are_tolerated() {
        let restriction: Restriction =
            serde_json::from_str(r#"{"reason": "payment_required"}"#).unwrap();
        assert_eq!(restriction.reason, RestrictionReason::Unknown);
    }
}
