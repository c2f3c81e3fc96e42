//! Error types for the Bungie client.

use thiserror::Error;

/// Errors that can occur when talking to the Bungie platform API.
#[derive(Error, Debug)]
pub enum BungieError {
    /// No API key was configured
    #[error("Bungie API key is not configured")]
    MissingApiKey,

    /// Invalid API root URL
    #[error("Invalid API root URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed from the configuration
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    /// Request could not be sent or the response body could not be read
    #[error("Bungie API unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// Response body did not match the platform envelope or the expected payload
    #[error("Failed to parse Bungie API response: {0}")]
    Envelope(String),

    /// Envelope parsed but carried no `Response` payload
    #[error("Bungie API returned no response ({error_status}, code {error_code}): {message}")]
    MissingResponse {
        error_code: i32,
        error_status: String,
        message: String,
    },
}

/// Result type for Bungie client operations.
pub type Result<T> = std::result::Result<T, BungieError>;
