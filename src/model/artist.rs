//! All objects related to artists.

use super::{ArtistId, ExternalUrls, Followers, Image};
use serde::{Deserialize, Serialize};

/// Artist object, hydrated from either the full or the simplified payload.
///
/// Fields only the full object carries (`followers`, `genres`, `images`,
/// `popularity`) stay empty when the artist arrived embedded in another
/// object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    /// Missing for artists of local files.
    #[serde(default)]
    pub id: Option<ArtistId>,
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Between 0 and 100, with 100 being the most popular.
    #[serde(default)]
    pub popularity: Option<u32>,
}

/// Wrapper for the several-artists endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Artists {
    pub artists: Vec<Option<Artist>>,
}

impl Artist {
    /// Widest available image URL, if any.
    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}
