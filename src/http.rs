//! Thin verb-per-method wrapper over [`reqwest::Client`].
//!
//! Endpoint and authentication concerns live in [`crate::client`]; this
//! layer only sends requests and maps non-2xx responses to [`ApiError`].

use crate::Result;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

pub type Headers = HashMap<String, String>;

/// Error object Spotify returns in the body of failed requests.
///
/// [Reference](https://developer.spotify.com/documentation/web-api/concepts/api-calls#regular-error-object)
#[derive(Debug, Clone, Deserialize, Error)]
#[error("spotify api error {status}: {message}")]
pub struct ApiError {
    #[serde(with = "status_code")]
    pub status: StatusCode,
    pub message: String,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

mod status_code {
    use reqwest::StatusCode;
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D>(d: D) -> Result<StatusCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u16::deserialize(d)?;
        StatusCode::from_u16(code).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub async fn get(
        &self,
        url: &str,
        headers: Option<&Headers>,
        query: &[(&str, &str)],
    ) -> Result<String> {
        let mut request = self.client.get(url).query(query);
        if let Some(headers) = headers {
            for (key, val) in headers {
                request = request.header(key, val);
            }
        }
        Self::handle(request.send().await?).await
    }

    pub async fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String> {
        self.send_json(Method::POST, url, headers, payload).await
    }

    pub async fn post_form(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &[(&str, &str)],
    ) -> Result<String> {
        let mut request = self.client.post(url).form(payload);
        if let Some(headers) = headers {
            for (key, val) in headers {
                request = request.header(key, val);
            }
        }
        Self::handle(request.send().await?).await
    }

    pub async fn put(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String> {
        self.send_json(Method::PUT, url, headers, payload).await
    }

    pub async fn delete(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String> {
        self.send_json(Method::DELETE, url, headers, payload).await
    }

    async fn send_json(
        &self,
        method: Method,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String> {
        let mut request = self.client.request(method, url);
        if let Some(headers) = headers {
            for (key, val) in headers {
                request = request.header(key, val);
            }
        }
        // PUT/DELETE endpoints taking only query parameters reject a JSON
        // body of `null`, so send one only when there is a payload.
        if !payload.is_null() {
            request = request.json(payload);
        }
        Self::handle(request.send().await?).await
    }

    /// Reads the body, converting Spotify's error envelope into [`ApiError`].
    async fn handle(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }
        match serde_json::from_str::<ApiErrorEnvelope>(&body) {
            Ok(envelope) => Err(envelope.error.into()),
            // 502s and proxies may respond with plain text.
            Err(_) => Err(ApiError {
                status,
                message: body,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_parses() {
        let body = r#"{"error": {"status": 404, "message": "non existing id"}}"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.error.message, "non existing id");
    }

    #[test]
    fn error_rejects_invalid_status() {
        let body = r#"{"error": {"status": 9999, "message": "?"}}"#;
        assert!(serde_json::from_str::<ApiErrorEnvelope>(body).is_err());
    }
}
