//! A typed, asynchronous client for the [Spotify Web API].
//!
//! The crate wraps the documented REST endpoints in resource managers
//! ([`endpoints`]) which hydrate typed structures ([`model`]) and feed a
//! per-client identity cache ([`cache`]) so that related objects (a track's
//! artists, an episode's show) can be resolved without re-fetching.
//!
//! ```no_run
//! use spotify_web::{Credentials, Spotify, model::TrackId};
//!
//! # async fn run() -> spotify_web::Result<()> {
//! let client = Spotify::new(Credentials::from_env().unwrap());
//! let id = TrackId::from_id("4iV5W9uYEdYUVa79Axb7Rh")?;
//! let track = client.tracks().get(id, None, false).await?;
//! println!("{} ({})", track.name, track.duration.num_seconds());
//! # Ok(())
//! # }
//! ```
//!
//! [Spotify Web API]: https://developer.spotify.com/documentation/web-api

pub mod auth;
pub mod cache;
pub mod client;
pub mod endpoints;
pub mod http;
pub mod model;

pub use auth::{Credentials, Token};
pub use cache::{Cache, CacheConfig};
pub use client::Spotify;
pub use http::ApiError;

use thiserror::Error;

/// Possible errors returned from the client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("json parse error: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid spotify id: {0}")]
    Id(#[from] model::IdError),

    /// A non-2xx response carrying Spotify's error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("token is not valid or could not be obtained")]
    InvalidToken,
}

pub type Result<T> = std::result::Result<T, Error>;
