//! Bungie Platform Client
//!
//! HTTP client library for the Bungie.net Destiny 2 platform API.
//!
//! # Features
//!
//! - **Envelope validation**: every response is checked against the platform
//!   envelope (`Response`, `ErrorCode`, `ThrottleSeconds`, `ErrorStatus`, `Message`)
//! - **User search**: global display name prefix search
//! - **Profiles**: profile and character components for a membership
//! - **Activity history**: per-character activity history
//!
//! # Example
//!
//! ```ignore
//! use bungie_client::{BungieApi, BungieClient, BungieConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BungieClient::new(BungieConfig::new("my-api-key"))?;
//!
//!     let page = client.search_by_global_name("Guardian", 0).await?;
//!     for hit in &page.search_results {
//!         println!("{}#{:?}", hit.bungie_global_display_name, hit.bungie_global_display_name_code);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod membership;
mod types;

pub use api::{BungieApi, PROFILE_COMPONENTS};
pub use client::{BungieClient, API_KEY_HEADER};
pub use error::{BungieError, Result};
pub use membership::{membership_type_label, UNKNOWN_MEMBERSHIP_LABEL};
pub use types::{
    ActivityDetails, ActivityHistoryEntry, ActivityHistoryQuery, ActivityHistoryResponse,
    BungieConfig, BungieResponse, DestinyCharacter, DestinyProfile, DictionaryComponentResponse,
    HistoricalStatBasicValue, HistoricalStatValue, ProfileResponse, SingleComponentResponse,
    UserInfoCard, UserSearchResponse, UserSearchResponseDetail,
    DEFAULT_API_ROOT,
};
