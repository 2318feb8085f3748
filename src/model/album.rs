//! All objects related to albums.

use super::{
    AlbumId, Artist, Copyright, ExternalIds, ExternalUrls, Image, Page, ReleaseDatePrecision,
    Restriction, parse_release_date,
    track::Track,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
    /// Only appears in artist discographies.
    AppearsOn,
}

/// Album object, hydrated from either the full or the simplified payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Album {
    #[serde(default)]
    pub album_type: Option<AlbumType>,
    /// Relationship to the artist when listed in a discography.
    #[serde(default)]
    pub album_group: Option<String>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    /// Missing for albums of local files.
    #[serde(default)]
    pub id: Option<AlbumId>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_date_precision: Option<ReleaseDatePrecision>,
    #[serde(default)]
    pub restrictions: Option<Restriction>,
    #[serde(default)]
    pub total_tracks: Option<u32>,
    #[serde(default)]
    pub uri: Option<String>,
    // Full-object fields.
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    /// First page of the album's tracks, present on the full object only.
    #[serde(default)]
    pub tracks: Option<Page<Track>>,
}

impl Album {
    /// The release date resolved against its precision (`"1981"` maps to
    /// January 1st, and so on).
    pub fn release_date(&self) -> Option<NaiveDate> {
        let date = self.release_date.as_deref()?;
        parse_release_date(date, self.release_date_precision?)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

/// Wrapper for the several-albums endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Albums {
    pub albums: Vec<Option<Album>>,
}

/// Entry of the user's saved-albums library.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SavedAlbum {
    pub added_at: DateTime<Utc>,
    pub album: Album,
}
