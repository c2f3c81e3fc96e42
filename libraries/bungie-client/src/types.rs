//! Types for Bungie platform API requests and responses.
//!
//! Field names follow the platform's JSON (camelCase payloads inside a
//! PascalCase envelope). Bungie encodes 64-bit ids as strings and 32-bit
//! hashes as numbers; the types below keep that split.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default root of the Bungie platform API.
pub const DEFAULT_API_ROOT: &str = "https://www.bungie.net/Platform";

/// Configuration for connecting to the Bungie platform API.
#[derive(Debug, Clone)]
pub struct BungieConfig {
    /// Root URL every endpoint path is appended to
    pub api_root: String,
    /// Application API key sent as `X-API-Key`
    pub api_key: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl BungieConfig {
    /// Create a config for the public platform root with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Point the client at a different API root (tests, proxies).
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Override both timeouts.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

// =============================================================================
// Envelope
// =============================================================================

/// Envelope wrapping every platform API response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BungieResponse<T> {
    /// Missing or `null` when the call failed upstream
    pub response: Option<T>,
    pub error_code: i32,
    pub throttle_seconds: i32,
    pub error_status: String,
    pub message: String,
    pub message_data: Option<serde_json::Value>,
}

// =============================================================================
// User Search Types
// =============================================================================

/// One page of global-name search results.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchResponse {
    #[serde(default)]
    pub search_results: Vec<UserSearchResponseDetail>,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub has_more: bool,
}

/// A single search hit: one Bungie.net account and its platform memberships.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchResponseDetail {
    #[serde(default)]
    pub bungie_global_display_name: String,
    pub bungie_global_display_name_code: Option<u16>,
    pub bungie_net_membership_id: Option<String>,
    #[serde(default)]
    pub destiny_memberships: Vec<UserInfoCard>,
}

/// One platform identity of an account.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoCard {
    #[serde(default)]
    pub display_name: String,
    pub membership_type: i32,
    pub membership_id: String,
    pub icon_path: Option<String>,
    pub cross_save_override: Option<i32>,
    #[serde(default)]
    pub applicable_membership_types: Vec<i32>,
    pub is_public: Option<bool>,
    pub bungie_global_display_name: Option<String>,
    pub bungie_global_display_name_code: Option<u16>,
    #[serde(rename = "LastSeenDisplayName")]
    pub last_seen_display_name: Option<String>,
    #[serde(rename = "LastSeenDisplayNameType")]
    pub last_seen_display_name_type: Option<i32>,
}

// =============================================================================
// Profile Types
// =============================================================================

/// Profile endpoint payload for the `Profiles` (100) and `Characters` (200)
/// components.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: Option<SingleComponentResponse<DestinyProfile>>,
    pub characters: Option<DictionaryComponentResponse<DestinyCharacter>>,
}

/// A component holding a single item.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SingleComponentResponse<T> {
    pub data: Option<T>,
    pub privacy: Option<i32>,
}

/// A component holding items keyed by id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DictionaryComponentResponse<T> {
    #[serde(default = "HashMap::new")]
    pub data: HashMap<String, T>,
    pub privacy: Option<i32>,
}

/// Account-level profile metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinyProfile {
    pub user_info: Option<UserInfoCard>,
    pub date_last_played: Option<DateTime<Utc>>,
    pub versions_owned: Option<i64>,
    /// Character ids in the order the platform lists them
    #[serde(default)]
    pub character_ids: Vec<String>,
    #[serde(default)]
    pub season_hashes: Vec<u32>,
    pub current_season_hash: Option<u32>,
    pub current_season_reward_power_cap: Option<i32>,
    pub current_guardian_rank: Option<i32>,
    pub lifetime_highest_guardian_rank: Option<i32>,
}

/// Snapshot of one character.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinyCharacter {
    pub membership_id: Option<String>,
    pub membership_type: Option<i32>,
    pub character_id: String,
    pub date_last_played: Option<DateTime<Utc>>,
    pub minutes_played_this_session: Option<String>,
    pub minutes_played_total: Option<String>,
    /// Power level
    #[serde(default)]
    pub light: i32,
    #[serde(default)]
    pub stats: HashMap<String, i32>,
    pub race_hash: Option<u32>,
    pub gender_hash: Option<u32>,
    pub class_hash: Option<u32>,
    pub race_type: Option<i32>,
    pub class_type: Option<i32>,
    pub gender_type: Option<i32>,
    pub emblem_path: Option<String>,
    pub emblem_background_path: Option<String>,
    pub emblem_hash: Option<u32>,
    pub title_record_hash: Option<u32>,
}

// =============================================================================
// Activity History Types
// =============================================================================

/// Query parameters for a character's activity history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityHistoryQuery {
    /// `DestinyActivityModeType` filter
    pub mode: i32,
    /// Rows to return, at most 250
    pub count: u32,
    pub page: u32,
}

/// Activity history payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityHistoryResponse {
    /// Absent when the character has no matching history
    #[serde(default)]
    pub activities: Vec<ActivityHistoryEntry>,
}

/// One completed activity instance.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityHistoryEntry {
    pub period: DateTime<Utc>,
    pub activity_details: ActivityDetails,
    #[serde(default)]
    pub values: HashMap<String, HistoricalStatValue>,
}

/// Identifies which activity an entry was.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetails {
    /// Activity definition hash
    pub reference_id: u32,
    pub director_activity_hash: Option<u32>,
    #[serde(default)]
    pub instance_id: String,
    pub mode: Option<i32>,
    #[serde(default)]
    pub modes: Vec<i32>,
    #[serde(default)]
    pub is_private: bool,
    pub membership_type: Option<i32>,
}

/// A single stat of an activity entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalStatValue {
    pub stat_id: Option<String>,
    pub basic: HistoricalStatBasicValue,
    pub activity_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalStatBasicValue {
    pub value: f64,
    #[serde(default)]
    pub display_value: String,
}
