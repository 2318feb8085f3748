//! Typed Spotify IDs.
//!
//! Every resource gets its own newtype so that a playlist ID cannot be
//! passed where a track ID is expected. The catalog IDs are 22 base62
//! characters and stored inline; user IDs are free-form and heap-allocated.

use crate::model::Type;
use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Spotify ID or URI parsing error.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum IdError {
    /// Spotify URI prefix is not `spotify:` or `spotify/`.
    #[error("invalid uri prefix")]
    Prefix,
    /// Spotify URI can't be split into type and id parts.
    #[error("invalid uri format")]
    Format,
    /// Spotify URI has an unknown type name, or the id has the wrong type
    /// for the context (e.g. an artist URI passed as a track id).
    #[error("invalid or mismatched id type")]
    Type,
    /// Spotify id is invalid (wrong length or non-alphanumeric characters).
    #[error("invalid id characters or length")]
    Id,
}

/// Splits a URI into its type and its actual ID, without validating the ID
/// part (that is done in each type's `from_id`).
pub fn parse_uri(uri: &str) -> Result<(Type, &str), IdError> {
    let mut chars = uri.strip_prefix("spotify").ok_or(IdError::Prefix)?.chars();
    let sep = match chars.next() {
        Some(ch) if ch == '/' || ch == ':' => ch,
        _ => return Err(IdError::Prefix),
    };
    let rest = chars.as_str();

    let (kind, id) = rest
        .rfind(sep)
        .map(|mid| rest.split_at(mid))
        .ok_or(IdError::Format)?;

    kind.parse::<Type>()
        .map_or(Err(IdError::Type), |kind| Ok((kind, &id[1..])))
}

macro_rules! define_catalog_id {
    ($(#[$doc:meta] $name:ident => $variant:ident;)+) => {$(
        #[$doc]
        ///
        /// Requires exactly 22 alphanumeric characters.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(try_from = "String")]
        pub struct $name(ArrayString<22>);

        impl $name {
            /// Parse a bare Spotify ID from a string slice.
            pub fn from_id(id: &str) -> Result<Self, IdError> {
                if id.len() == 22 && id.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                    ArrayString::from(id).map(Self).map_err(|_| IdError::Id)
                } else {
                    Err(IdError::Id)
                }
            }

            /// Parse a `spotify:…` URI from a string slice.
            pub fn from_uri(uri: &str) -> Result<Self, IdError> {
                let (kind, id) = parse_uri(uri)?;
                if kind == Type::$variant {
                    Self::from_id(id)
                } else {
                    Err(IdError::Type)
                }
            }

            /// Returns the bare id.
            pub fn id(&self) -> &str {
                &self.0
            }

            /// Returns the well-known URI form, `spotify:kind:id`.
            pub fn uri(&self) -> String {
                format!("spotify:{}:{}", Type::$variant, self.id())
            }

            /// Comma-joins bare ids the way `?ids=` query parameters expect.
            pub fn join_ids<'a>(ids: impl IntoIterator<Item = &'a Self>) -> String {
                ids.into_iter()
                    .map(Self::id)
                    .collect::<Vec<_>>()
                    .join(",")
            }
        }

        /// Accepts both the bare ID and the URI form when deserializing.
        impl TryFrom<String> for $name {
            type Error = IdError;
            fn try_from(value: String) -> Result<Self, Self::Error> {
                match Self::from_uri(&value) {
                    Ok(id) => Ok(id),
                    Err(IdError::Prefix) => Self::from_id(&value),
                    Err(error) => Err(error),
                }
            }
        }

        /// Displaying the ID shows its URI.
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.uri())
            }
        }
    )+};
}

define_catalog_id! {
    /// ID of type `Track`.
    TrackId => Track;
    /// ID of type `Album`.
    AlbumId => Album;
    /// ID of type `Artist`.
    ArtistId => Artist;
    /// ID of type `Playlist`.
    PlaylistId => Playlist;
    /// ID of type `Show`.
    ShowId => Show;
    /// ID of type `Episode`.
    EpisodeId => Episode;
}

/// ID of type `User`.
///
/// Unlike catalog IDs these are account names, so any non-empty string is
/// accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
pub struct UserId(String);

impl UserId {
    pub fn from_id(id: &str) -> Result<Self, IdError> {
        if id.is_empty() {
            Err(IdError::Id)
        } else {
            Ok(Self(id.to_owned()))
        }
    }

    pub fn from_uri(uri: &str) -> Result<Self, IdError> {
        let (kind, id) = parse_uri(uri)?;
        if kind == Type::User {
            Self::from_id(id)
        } else {
            Err(IdError::Type)
        }
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn uri(&self) -> String {
        format!("spotify:user:{}", self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = IdError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match Self::from_uri(&value) {
            Ok(id) => Ok(id),
            Err(IdError::Prefix) => Self::from_id(&value),
            Err(error) => Err(error),
        }
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.uri())
    }
}
