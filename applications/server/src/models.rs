/// View models returned to the UI
use bungie_client::DestinyCharacter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed activity, as returned by the history endpoint.
pub use bungie_client::ActivityHistoryEntry as Activity;

/// A resolved player, aggregated from search, profile and characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub display_name: String,
    pub display_name_code: Option<u16>,
    /// Canonical (first) membership used for profile lookups
    pub membership_id: String,
    pub membership_type: i32,
    /// Background emblem of the first character
    pub emblem_path: Option<String>,
    /// Highest power level across the account's characters
    pub light: i32,
    /// One entry per platform membership
    pub names: Vec<AlternateName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<Character>>,
}

/// A platform identity of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateName {
    /// Platform label, e.g. "Steam"
    pub platform: String,
    pub membership_type: i32,
    pub display_name: String,
}

/// A character embedded in a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub character_id: String,
    pub light: i32,
    pub class_type: Option<i32>,
    pub race_type: Option<i32>,
    pub gender_type: Option<i32>,
    pub class_hash: Option<u32>,
    pub race_hash: Option<u32>,
    pub gender_hash: Option<u32>,
    pub emblem_path: Option<String>,
    pub emblem_background_path: Option<String>,
    pub date_last_played: Option<DateTime<Utc>>,
    pub minutes_played_total: Option<String>,
}

impl From<&DestinyCharacter> for Character {
    fn from(character: &DestinyCharacter) -> Self {
        Self {
            character_id: character.character_id.clone(),
            light: character.light,
            class_type: character.class_type,
            race_type: character.race_type,
            gender_type: character.gender_type,
            class_hash: character.class_hash,
            race_hash: character.race_hash,
            gender_hash: character.gender_hash,
            emblem_path: character.emblem_path.clone(),
            emblem_background_path: character.emblem_background_path.clone(),
            date_last_played: character.date_last_played,
            minutes_played_total: character.minutes_played_total.clone(),
        }
    }
}
