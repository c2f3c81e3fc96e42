/// Common test utilities and fixtures

use async_trait::async_trait;
use bungie_client::{
    ActivityDetails, ActivityHistoryEntry, ActivityHistoryQuery, ActivityHistoryResponse,
    BungieApi, DestinyCharacter, DestinyProfile, DictionaryComponentResponse, ProfileResponse,
    Result, SingleComponentResponse, UserInfoCard, UserSearchResponse, UserSearchResponseDetail,
};
use chrono::{DateTime, Utc};
use mockall::mock;
use std::collections::HashMap;

mock! {
    pub Api {}

    #[async_trait]
    impl BungieApi for Api {
        async fn search_by_global_name(
            &self,
            display_name_prefix: &str,
            page: u32,
        ) -> Result<UserSearchResponse>;

        async fn get_profile(
            &self,
            membership_type: i32,
            membership_id: &str,
        ) -> Result<ProfileResponse>;

        async fn get_activity_history(
            &self,
            membership_type: i32,
            membership_id: &str,
            character_id: &str,
            query: ActivityHistoryQuery,
        ) -> Result<ActivityHistoryResponse>;
    }
}

pub const XBOX: i32 = 1;
pub const PSN: i32 = 2;
pub const STEAM: i32 = 3;

pub const NORMAL_HASH: u32 = 2064836415;
pub const LEGEND_HASH: u32 = 3439345485;

pub fn membership(membership_type: i32, membership_id: &str, display_name: &str) -> UserInfoCard {
    UserInfoCard {
        display_name: display_name.to_string(),
        membership_type,
        membership_id: membership_id.to_string(),
        icon_path: None,
        cross_save_override: None,
        applicable_membership_types: vec![membership_type],
        is_public: Some(true),
        bungie_global_display_name: None,
        bungie_global_display_name_code: None,
        last_seen_display_name: None,
        last_seen_display_name_type: None,
    }
}

pub fn search_hit(global_name: &str, code: u16, memberships: Vec<UserInfoCard>) -> UserSearchResponseDetail {
    UserSearchResponseDetail {
        bungie_global_display_name: global_name.to_string(),
        bungie_global_display_name_code: Some(code),
        bungie_net_membership_id: Some("20000001".to_string()),
        destiny_memberships: memberships,
    }
}

pub fn search_page(hits: Vec<UserSearchResponseDetail>) -> UserSearchResponse {
    UserSearchResponse {
        search_results: hits,
        page: 0,
        has_more: false,
    }
}

pub fn character(character_id: &str, light: i32) -> DestinyCharacter {
    DestinyCharacter {
        membership_id: None,
        membership_type: None,
        character_id: character_id.to_string(),
        date_last_played: None,
        minutes_played_this_session: None,
        minutes_played_total: Some("600".to_string()),
        light,
        stats: HashMap::new(),
        race_hash: None,
        gender_hash: None,
        class_hash: None,
        race_type: Some(0),
        class_type: Some(1),
        gender_type: Some(0),
        emblem_path: Some(format!("/icons/{}.jpg", character_id)),
        emblem_background_path: Some(format!("/icons/{}_bg.jpg", character_id)),
        emblem_hash: None,
        title_record_hash: None,
    }
}

/// A profile listing `character_ids` in order, with `characters` in its map.
pub fn profile(character_ids: &[&str], characters: Vec<DestinyCharacter>) -> ProfileResponse {
    ProfileResponse {
        profile: Some(SingleComponentResponse {
            data: Some(DestinyProfile {
                user_info: None,
                date_last_played: None,
                versions_owned: None,
                character_ids: character_ids.iter().map(|id| id.to_string()).collect(),
                season_hashes: vec![],
                current_season_hash: None,
                current_season_reward_power_cap: None,
                current_guardian_rank: Some(5),
                lifetime_highest_guardian_rank: Some(7),
            }),
            privacy: Some(1),
        }),
        characters: Some(DictionaryComponentResponse {
            data: characters
                .into_iter()
                .map(|c| (c.character_id.clone(), c))
                .collect(),
            privacy: Some(1),
        }),
    }
}

pub fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn activity(reference_id: u32, instance_id: &str, period: &str) -> ActivityHistoryEntry {
    ActivityHistoryEntry {
        period: at(period),
        activity_details: ActivityDetails {
            reference_id,
            director_activity_hash: Some(reference_id),
            instance_id: instance_id.to_string(),
            mode: Some(7),
            modes: vec![7],
            is_private: false,
            membership_type: Some(STEAM),
        },
        values: HashMap::new(),
    }
}

pub fn history(activities: Vec<ActivityHistoryEntry>) -> ActivityHistoryResponse {
    ActivityHistoryResponse { activities }
}
