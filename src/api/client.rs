//! Cambly API HTTP client.

use std::time::Duration;

use reqwest::{header, Client, Response};

use crate::api::types::{Chat, ChatsResponse, Credentials, Lesson, Session, SessionResponse};
use crate::error::{Error, Result};

/// Cambly API base URL.
const API_BASE: &str = "https://www.cambly.com";

/// Connection timeout for all requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Read timeout; bounds how long a stalled transfer may hang.
const READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Cambly API client.
///
/// Holds the HTTP client and base URL; session state is passed explicitly to
/// each call rather than stored on the client.
pub struct CamblyApi {
    client: Client,
    base_url: String,
}

impl CamblyApi {
    /// Create a new API client against the production endpoint.
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_base_url(API_BASE, user_agent)
    }

    /// Create a new API client against an arbitrary base URL.
    pub fn with_base_url(base_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Log in with email and password, returning the session token and user ID.
    ///
    /// No retry; a login failure aborts the run.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let url = format!("{}/api/sessions", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(
                header::CONTENT_TYPE,
                "application/json; charset=UTF-8",
            )
            .json(credentials)
            .send()
            .await
            .map_err(|e| Error::Auth(format!("login request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Login response status: {}", status);

        if !status.is_success() {
            return Err(Error::Auth(format!("login rejected: HTTP {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Auth(format!("failed to read login response: {}", e)))?;

        let parsed: SessionResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Auth(format!("malformed login response: {}", e)))?;

        if parsed.result.token.is_empty() || parsed.result.user_id.is_empty() {
            return Err(Error::Auth(
                "login response missing token or userId".to_string(),
            ));
        }

        Ok(Session {
            token: parsed.result.token,
            user_id: parsed.result.user_id,
        })
    }

    /// List the student's chats that carry a lesson recording.
    ///
    /// The server returns chats in descending order; that order is preserved.
    /// A `limit` of zero or less requests the server default (no limit
    /// parameter is sent).
    pub async fn list_lessons(&self, session: &Session, limit: i64) -> Result<Vec<Lesson>> {
        let url = format!("{}/api/chats", self.base_url);
        let query = chats_query(&session.user_id, limit);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .header(
                header::ACCEPT,
                "application/json, text/javascript, */*; q=0.01",
            )
            .header(
                header::AUTHORIZATION,
                format!("Cambly session-token='{}'", session.token),
            )
            .send()
            .await
            .map_err(|e| Error::List(format!("listing request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Listing response status: {}", status);

        if !status.is_success() {
            return Err(Error::List(format!("listing rejected: HTTP {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::List(format!("failed to read listing response: {}", e)))?;

        let parsed: ChatsResponse = serde_json::from_str(&text)
            .map_err(|e| Error::List(format!("malformed listing response: {}", e)))?;

        Ok(parsed
            .result
            .into_iter()
            .filter_map(Chat::into_lesson)
            .collect())
    }

    /// Start a streaming download of a recording.
    ///
    /// Recording URLs are pre-signed; no Authorization header is sent.
    pub async fn fetch_recording(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Download(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "HTTP {} fetching {}",
                response.status(),
                url
            )));
        }

        Ok(response)
    }
}

/// Build the query string parameters for the chats listing.
fn chats_query(user_id: &str, limit: i64) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("language", "en".to_string()),
        ("userId", user_id.to_string()),
        ("sort", "-1".to_string()),
        ("role", "student".to_string()),
    ];

    if limit > 0 {
        query.push(("limit", limit.to_string()));
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chats_query_includes_positive_limit() {
        let query = chats_query("U123", 5);
        assert!(query.contains(&("limit", "5".to_string())));
        assert!(query.contains(&("userId", "U123".to_string())));
        assert!(query.contains(&("sort", "-1".to_string())));
        assert!(query.contains(&("role", "student".to_string())));
        assert!(query.contains(&("language", "en".to_string())));
    }

    #[test]
    fn test_chats_query_omits_non_positive_limit() {
        for limit in [0, -1, -100] {
            let query = chats_query("U123", limit);
            assert!(!query.iter().any(|(key, _)| *key == "limit"));
            assert_eq!(query.len(), 4);
        }
    }
}
