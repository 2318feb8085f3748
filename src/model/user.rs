//! User profile objects.

use super::{ExternalUrls, Followers, Image, UserId};
use serde::{Deserialize, Serialize};

/// Publicly available profile information.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PublicUser {
    #[serde(default)]
    pub display_name: Option<String>,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub href: Option<String>,
    pub id: UserId,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// The authenticated user's profile, as returned by `/me`. Email and
/// country require their respective scopes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrivateUser {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub explicit_content: Option<ExplicitContent>,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Option<Followers>,
    pub href: String,
    pub id: UserId,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Subscription level (`premium`, `free`, …).
    #[serde(default)]
    pub product: Option<String>,
    pub uri: String,
}

/// The user's explicit content settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExplicitContent {
    pub filter_enabled: bool,
    pub filter_locked: bool,
}
