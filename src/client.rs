//! The API client: authentication state, request helpers and manager
//! accessors.

use crate::{
    Error, Result,
    auth::{Credentials, TOKEN_URL, Token},
    cache::{Cache, CacheConfig},
    endpoints::{Albums, Artists, Episodes, Playlists, Search, Shows, Tracks, Users},
    http::{Headers, HttpClient},
};
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

const API_ENDPOINT: &str = "https://api.spotify.com/v1";

/// Client for the Spotify Web API.
///
/// Construct it with application [`Credentials`] (client-credentials grant,
/// fetched lazily on the first request) or inject a [`Token`] obtained
/// through any other authorization flow. All resource operations hang off
/// the manager accessors ([`tracks`](Self::tracks),
/// [`playlists`](Self::playlists), …) and share this client's identity
/// [`Cache`].
#[derive(Debug, Default)]
pub struct Spotify {
    pub(crate) http: HttpClient,
    creds: Option<Credentials>,
    token: RwLock<Option<Token>>,
    cache: Cache,
}

impl Spotify {
    pub fn new(creds: Credentials) -> Self {
        Self::with_config(creds, CacheConfig::default())
    }

    pub fn with_config(creds: Credentials, config: CacheConfig) -> Self {
        Self {
            creds: Some(creds),
            cache: Cache::new(config),
            ..Self::default()
        }
    }

    /// Wraps a token obtained elsewhere; user authorization flows live
    /// outside this crate. Pass the credentials too if the token carries a
    /// refresh token, so refreshing can identify the application.
    pub fn from_token(token: Token, creds: Option<Credentials>) -> Self {
        Self {
            creds,
            token: RwLock::new(Some(token)),
            ..Self::default()
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // Manager accessors.

    pub const fn tracks(&self) -> Tracks<'_> {
        Tracks(self)
    }

    pub const fn albums(&self) -> Albums<'_> {
        Albums(self)
    }

    pub const fn artists(&self) -> Artists<'_> {
        Artists(self)
    }

    pub const fn playlists(&self) -> Playlists<'_> {
        Playlists(self)
    }

    pub const fn shows(&self) -> Shows<'_> {
        Shows(self)
    }

    pub const fn episodes(&self) -> Episodes<'_> {
        Episodes(self)
    }

    pub const fn users(&self) -> Users<'_> {
        Users(self)
    }

    pub const fn search(&self) -> Search<'_> {
        Search(self)
    }

    /// The current token, if one has been obtained.
    pub fn token(&self) -> Option<Token> {
        self.token.read().clone()
    }

    /// The headers required for authenticated requests to the API.
    ///
    /// Since every authenticated request goes through here, it's where
    /// automatic (re)authentication takes place.
    async fn auth_headers(&self) -> Result<Headers> {
        let needs_token = {
            let token = self.token.read();
            token.as_ref().is_none_or(Token::is_expired)
        };
        if needs_token {
            let refreshed = self.refetch_token().await?;
            *self.token.write() = Some(refreshed);
        }

        let token = self.token.read();
        let access = &token.as_ref().ok_or(Error::InvalidToken)?.access;
        Ok(Headers::from([(
            "authorization".to_owned(),
            format!("Bearer {access}"),
        )]))
    }

    /// Obtains a fresh token: via the refresh grant when the current token
    /// carries a refresh token, otherwise via the client-credentials grant.
    async fn refetch_token(&self) -> Result<Token> {
        let refresh = self
            .token
            .read()
            .as_ref()
            .and_then(|token| token.refresh.clone());

        match (refresh, &self.creds) {
            (Some(refresh), creds) => {
                debug!("refreshing access token");
                let mut payload = vec![
                    ("grant_type", "refresh_token"),
                    ("refresh_token", refresh.as_str()),
                ];
                // Public clients identify themselves in the body; apps with
                // a secret use the Basic header instead.
                if let Some(creds) = creds.as_ref().filter(|creds| creds.secret.is_none()) {
                    payload.push(("client_id", creds.id.as_str()));
                }
                let mut token = self.fetch_access_token(&payload).await?;
                // The accounts service omits the refresh token when it stays
                // valid for the next refresh.
                if token.refresh.is_none() {
                    token.refresh = Some(refresh);
                }
                Ok(token)
            }
            (None, Some(creds)) if creds.secret.is_some() => {
                debug!("requesting client-credentials token");
                self.fetch_access_token(&[("grant_type", "client_credentials")])
                    .await
            }
            _ => Err(Error::InvalidToken),
        }
    }

    /// Sends a request to the accounts service for an access token.
    async fn fetch_access_token(&self, payload: &[(&str, &str)]) -> Result<Token> {
        let headers = self
            .creds
            .as_ref()
            .and_then(Credentials::basic_auth)
            .map(|header| Headers::from([header]));
        let response = self
            .http
            .post_form(TOKEN_URL, headers.as_ref(), payload)
            .await?;
        let token: Token = serde_json::from_str(&response)?;
        Ok(token.stamp_expiry())
    }

    // HTTP convenience methods wrapping the base client with the endpoint
    // prefix and authentication.

    /// Sends GET requests to an API endpoint, skipping absent query params.
    pub(crate) async fn api_get(
        &self,
        path: &str,
        params: &[(&str, Option<&str>)],
    ) -> Result<String> {
        let params = present_params(params);
        debug!(path, "GET");
        self.http
            .get(
                &format!("{API_ENDPOINT}/{path}"),
                Some(&self.auth_headers().await?),
                &params,
            )
            .await
    }

    /// Sends POST requests to an API endpoint.
    pub(crate) async fn api_post(&self, path: &str, payload: &Value) -> Result<String> {
        debug!(path, "POST");
        self.http
            .post(
                &format!("{API_ENDPOINT}/{path}"),
                Some(&self.auth_headers().await?),
                payload,
            )
            .await
    }

    /// Sends PUT requests to an API endpoint.
    pub(crate) async fn api_put(&self, path: &str, payload: &Value) -> Result<()> {
        debug!(path, "PUT");
        self.http
            .put(
                &format!("{API_ENDPOINT}/{path}"),
                Some(&self.auth_headers().await?),
                payload,
            )
            .await?;
        Ok(())
    }

    /// Sends DELETE requests to an API endpoint.
    pub(crate) async fn api_delete(&self, path: &str, payload: &Value) -> Result<String> {
        debug!(path, "DELETE");
        self.http
            .delete(
                &format!("{API_ENDPOINT}/{path}"),
                Some(&self.auth_headers().await?),
                payload,
            )
            .await
    }

    /// Converts a JSON response into its model.
    pub(crate) fn convert<T: serde::de::DeserializeOwned>(input: &str) -> Result<T> {
        serde_json::from_str(input).map_err(Into::into)
    }
}

/// Drops the query parameters the caller left unset.
fn present_params<'a>(params: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, &'a str)> {
    params
        .iter()
        .filter_map(|&(k, v)| v.map(|v_inner| (k, v_inner)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_query_params_are_dropped() {
        assert_eq!(
            present_params(&[
                ("market", Some("DE")),
                ("limit", None),
                ("offset", Some("50")),
            ]),
            [("market", "DE"), ("offset", "50")]
        );
        assert!(present_params(&[("market", None)]).is_empty());
    }

    #[tokio::test]
    async fn injected_token_is_sent_as_bearer() {
        let client = Spotify::from_token(Token::from_access("tok"), None);
        let headers = client.auth_headers().await.unwrap();
        assert_eq!(
            headers.get("authorization").map(String::as_str),
            Some("Bearer tok")
        );
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_any_request() {
        let client = Spotify::default();
        assert!(matches!(
            client.auth_headers().await,
            Err(Error::InvalidToken)
        ));
    }
}
