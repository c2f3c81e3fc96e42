//! Bungie platform API client.

use crate::error::{BungieError, Result};
use crate::types::{BungieConfig, BungieResponse};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, error};
use url::Url;

/// Header carrying the application API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Bytes escaped inside a single path segment; `/` and `%` included.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Client for the Bungie platform API.
///
/// Every request carries the configured API key. Responses are validated
/// against the platform envelope before the payload is handed back.
///
/// # Example
///
/// ```ignore
/// use bungie_client::{BungieApi, BungieClient, BungieConfig};
///
/// let client = BungieClient::new(BungieConfig::new(api_key))?;
/// let page = client.search_by_global_name("Guardian", 0).await?;
/// println!("Found {} accounts", page.search_results.len());
/// ```
#[derive(Debug, Clone)]
pub struct BungieClient {
    http: Client,
    config: BungieConfig,
}

impl BungieClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BungieConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(BungieError::MissingApiKey);
        }

        let api_root = config.api_root.trim_end_matches('/').to_string();
        let parsed = Url::parse(&api_root).map_err(|e| BungieError::InvalidUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(BungieError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("OnslaughtTracker/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BungieError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            config: BungieConfig {
                api_root,
                ..config
            },
        })
    }

    /// Get the API root requests are sent to.
    pub fn api_root(&self) -> &str {
        &self.config.api_root
    }

    /// Call a platform endpoint.
    ///
    /// `endpoint` is appended to the API root. A body selects `POST` with the
    /// body serialized as JSON; no body selects `GET`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&HashMap<String, String>>,
    ) -> Result<BungieResponse<T>> {
        let url = format!("{}{}", self.config.api_root, endpoint);

        let request = match body {
            Some(body) => {
                debug!(url = %url, "POST Bungie endpoint");
                self.http.post(&url).json(body)
            }
            None => {
                debug!(url = %url, "GET Bungie endpoint");
                self.http.get(&url)
            }
        };

        let response = request
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Bungie request failed");
                BungieError::Unavailable(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to read Bungie response body");
            BungieError::Unavailable(e)
        })?;

        let envelope = parse_envelope::<T>(&text).map_err(|e| {
            debug!(url = %url, status = status.as_u16(), error = %e, "Rejected Bungie response");
            e
        })?;

        debug!(
            url = %url,
            status = status.as_u16(),
            error_code = envelope.error_code,
            error_status = %envelope.error_status,
            "Bungie call complete"
        );

        Ok(envelope)
    }

    /// Call an endpoint and unwrap the envelope's payload.
    pub(crate) async fn call_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&HashMap<String, String>>,
    ) -> Result<T> {
        let envelope = self.call::<T>(endpoint, body).await?;
        envelope.response.ok_or(BungieError::MissingResponse {
            error_code: envelope.error_code,
            error_status: envelope.error_status,
            message: envelope.message,
        })
    }
}

/// Validate a raw body against the envelope, then the payload against `T`.
fn parse_envelope<T: DeserializeOwned>(text: &str) -> Result<BungieResponse<T>> {
    let raw: BungieResponse<serde_json::Value> = serde_json::from_str(text)
        .map_err(|e| BungieError::Envelope(format!("Invalid envelope: {}", e)))?;

    let response = match raw.response {
        Some(serde_json::Value::Null) | None => None,
        Some(value) => Some(
            serde_json::from_value::<T>(value)
                .map_err(|e| BungieError::Envelope(format!("Invalid response payload: {}", e)))?,
        ),
    };

    Ok(BungieResponse {
        response,
        error_code: raw.error_code,
        throttle_seconds: raw.throttle_seconds,
        error_status: raw.error_status,
        message: raw.message,
        message_data: raw.message_data,
    })
}

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserSearchResponse;

    #[test]
    fn test_api_key_required() {
        let result = BungieClient::new(BungieConfig::new(""));
        assert!(matches!(result, Err(BungieError::MissingApiKey)));

        let result = BungieClient::new(BungieConfig::new("   "));
        assert!(matches!(result, Err(BungieError::MissingApiKey)));
    }

    #[test]
    fn test_api_root_validation() {
        let config = BungieConfig::new("key").with_api_root("ftp://bungie.net/Platform");
        assert!(matches!(
            BungieClient::new(config),
            Err(BungieError::InvalidUrl(_))
        ));

        let config = BungieConfig::new("key").with_api_root("not a url");
        assert!(matches!(
            BungieClient::new(config),
            Err(BungieError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_api_root_normalization() {
        let config = BungieConfig::new("key").with_api_root("http://localhost:8080/Platform/");
        let client = BungieClient::new(config).expect("valid config");
        assert_eq!(client.api_root(), "http://localhost:8080/Platform");
    }

    #[test]
    fn test_parse_envelope_with_payload() {
        let text = r#"{
            "Response": { "searchResults": [], "page": 0, "hasMore": false },
            "ErrorCode": 1,
            "ThrottleSeconds": 0,
            "ErrorStatus": "Success",
            "Message": "Ok",
            "MessageData": {}
        }"#;

        let envelope = parse_envelope::<UserSearchResponse>(text).unwrap();
        assert_eq!(envelope.error_code, 1);
        assert!(envelope.response.unwrap().search_results.is_empty());
    }

    #[test]
    fn test_parse_envelope_null_response() {
        let text = r#"{
            "Response": null,
            "ErrorCode": 5,
            "ThrottleSeconds": 0,
            "ErrorStatus": "SystemDisabled",
            "Message": "This system is temporarily disabled for maintenance."
        }"#;

        let envelope = parse_envelope::<UserSearchResponse>(text).unwrap();
        assert!(envelope.response.is_none());
        assert_eq!(envelope.error_status, "SystemDisabled");
    }

    #[test]
    fn test_parse_envelope_rejects_missing_fields() {
        let text = r#"{ "Response": {}, "ErrorCode": 1 }"#;
        assert!(matches!(
            parse_envelope::<serde_json::Value>(text),
            Err(BungieError::Envelope(_))
        ));
    }

    #[test]
    fn test_parse_envelope_rejects_non_json() {
        assert!(matches!(
            parse_envelope::<serde_json::Value>("<html>502 Bad Gateway</html>"),
            Err(BungieError::Envelope(_))
        ));
    }

    #[test]
    fn test_parse_envelope_rejects_mismatched_payload() {
        let text = r#"{
            "Response": { "searchResults": "nope" },
            "ErrorCode": 1,
            "ThrottleSeconds": 0,
            "ErrorStatus": "Success",
            "Message": "Ok"
        }"#;

        let err = parse_envelope::<UserSearchResponse>(text).unwrap_err();
        assert!(err.to_string().contains("Invalid response payload"));
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("4611686018467284386"), "4611686018467284386");
        assert_eq!(segment("../x"), "..%2Fx");
        assert_eq!(segment("a b"), "a%20b");
        assert_eq!(segment("a+b"), "a+b");
        assert_eq!(segment("50%?"), "50%25%3F");
    }

    #[test]
    fn test_client_build_error_is_not_transport() {
        let err = BungieError::HttpClient("TLS backend unavailable".to_string());
        assert!(!matches!(err, BungieError::Unavailable(_)));
        assert!(err.to_string().starts_with("Failed to build HTTP client"));
    }
}
