//! Access token material for the Spotify accounts service.
//!
//! Only the token grants the library itself needs are implemented: the
//! client-credentials grant and the refresh grant. Tokens obtained through
//! any other flow can be injected with [`crate::Spotify::from_token`].

use crate::model::custom_serde::{duration_second, space_separated_scopes};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Duration, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub(crate) const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Spotify access token information.
///
/// [Reference](https://developer.spotify.com/documentation/web-api/concepts/access-token)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// An access token that can be provided in subsequent calls.
    #[serde(rename = "access_token")]
    pub access: String,
    /// The time period for which the access token is valid.
    #[serde(with = "duration_second")]
    pub expires_in: Duration,
    /// Absolute expiry instant, filled in when the token is received.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// A token that can be sent to the accounts service in place of an
    /// authorization code to obtain the next access token.
    #[serde(rename = "refresh_token")]
    pub refresh: Option<String>,
    /// The [scopes] granted for this access token.
    ///
    /// [scopes]: https://developer.spotify.com/documentation/web-api/concepts/scopes
    // The token response carries a singular space-separated `scope` string.
    #[serde(default, with = "space_separated_scopes", rename = "scope")]
    pub scopes: HashSet<String>,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            access: String::new(),
            expires_in: Duration::zero(),
            expires_at: Some(Utc::now()),
            refresh: None,
            scopes: HashSet::new(),
        }
    }
}

impl Token {
    /// Wraps an access token string obtained elsewhere. Such a token never
    /// reads as expired; the caller is responsible for its lifetime.
    pub fn from_access(access: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            expires_at: None,
            ..Self::default()
        }
    }

    /// Check if the token is expired. It includes a margin of 10 seconds
    /// (which is how much a request would take in the worst case scenario).
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expiration| Utc::now() + TimeDelta::seconds(10) >= expiration)
    }

    /// Stamps `expires_at` from `expires_in`, to be called on receipt.
    pub(crate) fn stamp_expiry(mut self) -> Self {
        self.expires_at = Utc::now().checked_add_signed(self.expires_in);
        self
    }
}

/// Application credentials issued in the Spotify developer dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub id: String,
    /// Absent for flows that never disclose the secret (PKCE-obtained
    /// refresh tokens only need the client id).
    pub secret: Option<String>,
}

impl Credentials {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: Some(secret.into()),
        }
    }

    pub fn new_public(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: None,
        }
    }

    /// Reads `SPOTIFY_CLIENT_ID` and optionally `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            id: std::env::var("SPOTIFY_CLIENT_ID").ok()?,
            secret: std::env::var("SPOTIFY_CLIENT_SECRET").ok(),
        })
    }

    /// `Authorization: Basic` header value for token requests.
    pub(crate) fn basic_auth(&self) -> Option<(String, String)> {
        let secret = self.secret.as_ref()?;
        let value = format!("Basic {}", STANDARD.encode(format!("{}:{secret}", self.id)));
        Some(("authorization".to_owned(), value))
    }
}
