//! HTTP client for the remote Contact API

use super::traits::ContactApi;
use crate::state::FormData;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Default Contact API address for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Failure modes of a submit attempt, as surfaced to the user.
///
/// Deliberately coarse: connection errors, non-2xx statuses, and unreadable
/// bodies all collapse into `Transport`. The underlying cause only goes to
/// the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    /// No usable response was obtained
    #[error("Failed to send message")]
    Transport,
    /// The server answered but declined the submission
    #[error("Something went wrong")]
    Rejected,
}

/// Acknowledgement payload returned by the Contact API
#[derive(Debug, Deserialize)]
struct ContactAck {
    success: bool,
}

/// Client for the remote Contact API
pub struct ContactClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContactClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/contact", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ContactApi for ContactClient {
    async fn submit(&self, form: &FormData) -> Result<(), ContactError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(form)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("contact request failed: {err}");
                ContactError::Transport
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("contact request returned {status}");
            return Err(ContactError::Transport);
        }

        let ack: ContactAck = response.json().await.map_err(|err| {
            tracing::warn!("contact response body unreadable: {err}");
            ContactError::Transport
        })?;

        if ack.success {
            Ok(())
        } else {
            tracing::warn!("contact submission declined by server");
            Err(ContactError::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_contact_path() {
        let client = ContactClient::new("http://localhost:8000");
        assert_eq!(client.endpoint(), "http://localhost:8000/api/contact");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = ContactClient::new("https://api.flames.agency/");
        assert_eq!(client.endpoint(), "https://api.flames.agency/api/contact");
    }

    #[test]
    fn test_error_messages_match_user_facing_copy() {
        assert_eq!(ContactError::Transport.to_string(), "Failed to send message");
        assert_eq!(ContactError::Rejected.to_string(), "Something went wrong");
    }

    #[test]
    fn test_ack_parses_success_flag() {
        let ack: ContactAck = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ack.success);
        let ack: ContactAck = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!ack.success);
    }

    #[test]
    fn test_ack_rejects_body_without_success_field() {
        let result = serde_json::from_str::<ContactAck>(r#"{"ok":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ack_tolerates_extra_fields() {
        let ack: ContactAck =
            serde_json::from_str(r#"{"success":true,"id":"42"}"#).unwrap();
        assert!(ack.success);
    }
}
