//! HTTP client for the capability directory API
//!
//! The server is a black box behind three endpoints: a full-directory read,
//! and register/unregister mutations keyed by (capability, email).

use std::sync::OnceLock;

use serde::Deserialize;

use crate::types::CapabilityDirectory;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
pub fn init_api_base(url: String) {
    API_BASE.set(url).ok();
}

/// Get the configured API base URL. Defaults to same-origin relative paths.
pub fn api_base() -> &'static str {
    API_BASE.get().map(|s| s.as_str()).unwrap_or("")
}

/// Error type for directory API operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent, or the response body was not JSON.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Well-formed non-2xx response; carries the server's `detail` message.
    #[error("{0}")]
    Rejected(String),
}

/// Acknowledgement body shared by both mutation endpoints: 2xx responses
/// carry `message`, rejections carry `detail` (possibly absent).
#[derive(Debug, Deserialize)]
struct MutationAck {
    #[serde(default)]
    message: String,
    #[serde(default)]
    detail: Option<String>,
}

impl MutationAck {
    fn rejection_detail(self) -> String {
        self.detail
            .unwrap_or_else(|| "An error occurred".to_string())
    }
}

fn mutation_url(base: &str, capability: &str, action: &str, email: &str) -> String {
    format!(
        "{}/capabilities/{}/{}?email={}",
        base,
        urlencoding::encode(capability),
        action,
        urlencoding::encode(email)
    )
}

/// Client for the capability directory endpoints
#[derive(Clone)]
pub struct DirectoryClient {
    client: reqwest::Client,
    base: String,
}

impl DirectoryClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Fetch the full directory snapshot.
    ///
    /// The body is parsed regardless of status; a non-JSON body surfaces as
    /// `ClientError::Network`, matching the "replace the listing" failure
    /// path rather than the banner path.
    pub async fn fetch_directory(&self) -> Result<CapabilityDirectory, ClientError> {
        let response = self
            .client
            .get(format!("{}/capabilities", self.base))
            .send()
            .await?;
        Ok(response.json().await?)
    }

    /// Register an email against a capability. Returns the server's
    /// confirmation message.
    pub async fn register(&self, capability: &str, email: &str) -> Result<String, ClientError> {
        let url = mutation_url(&self.base, capability, "register", email);
        let response = self.client.post(url).send().await?;
        let status = response.status();
        let ack: MutationAck = response.json().await?;

        if status.is_success() {
            Ok(ack.message)
        } else {
            Err(ClientError::Rejected(ack.rejection_detail()))
        }
    }

    /// Withdraw an email from a capability. Same contract as `register`.
    pub async fn unregister(&self, capability: &str, email: &str) -> Result<String, ClientError> {
        let url = mutation_url(&self.base, capability, "unregister", email);
        let response = self.client.delete(url).send().await?;
        let status = response.status();
        let ack: MutationAck = response.json().await?;

        if status.is_success() {
            Ok(ack.message)
        } else {
            Err(ClientError::Rejected(ack.rejection_detail()))
        }
    }
}

/// Create a client against the configured base URL.
pub fn browser_client() -> DirectoryClient {
    DirectoryClient::new(api_base())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_defaults_to_same_origin() {
        assert_eq!(api_base(), "");
        init_api_base("https://hub.example".to_string());
        assert_eq!(api_base(), "https://hub.example");
        // A second init is ignored; the first one wins.
        init_api_base("https://other.example".to_string());
        assert_eq!(api_base(), "https://hub.example");
    }

    #[test]
    fn test_mutation_url_percent_encodes() {
        let url = mutation_url("", "Data Engineering", "register", "a+b@x.com");
        assert_eq!(
            url,
            "/capabilities/Data%20Engineering/register?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn test_mutation_url_with_base() {
        let url = mutation_url("https://hub.example", "Cloud Migration", "unregister", "a@x.com");
        assert_eq!(
            url,
            "https://hub.example/capabilities/Cloud%20Migration/unregister?email=a%40x.com"
        );
    }

    #[test]
    fn test_rejection_detail_uses_server_message() {
        let ack: MutationAck =
            serde_json::from_str(r#"{"detail": "Already registered"}"#).unwrap();
        assert_eq!(ack.rejection_detail(), "Already registered");
    }

    #[test]
    fn test_rejection_detail_fallback() {
        let ack: MutationAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.rejection_detail(), "An error occurred");
    }

    #[test]
    fn test_success_ack_message() {
        let ack: MutationAck =
            serde_json::from_str(r#"{"message": "Registered a@x.com"}"#).unwrap();
        assert_eq!(ack.message, "Registered a@x.com");
    }
}
