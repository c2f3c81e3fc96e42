//! Typed platform endpoints.

use crate::client::{segment, BungieClient};
use crate::error::Result;
use crate::types::{
    ActivityHistoryQuery, ActivityHistoryResponse, ProfileResponse, UserSearchResponse,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Profile components requested with every profile lookup: `Profiles`, `Characters`.
pub const PROFILE_COMPONENTS: &str = "100,200";

/// The platform endpoints the tracker depends on.
///
/// Implemented by [`BungieClient`]; resolvers take `dyn BungieApi` so they can
/// run against a mock.
#[async_trait]
pub trait BungieApi: Send + Sync {
    /// Search accounts whose global display name starts with `display_name_prefix`.
    async fn search_by_global_name(
        &self,
        display_name_prefix: &str,
        page: u32,
    ) -> Result<UserSearchResponse>;

    /// Fetch the profile and characters of one platform membership.
    async fn get_profile(&self, membership_type: i32, membership_id: &str)
        -> Result<ProfileResponse>;

    /// Fetch one character's activity history.
    async fn get_activity_history(
        &self,
        membership_type: i32,
        membership_id: &str,
        character_id: &str,
        query: ActivityHistoryQuery,
    ) -> Result<ActivityHistoryResponse>;
}

#[async_trait]
impl BungieApi for BungieClient {
    async fn search_by_global_name(
        &self,
        display_name_prefix: &str,
        page: u32,
    ) -> Result<UserSearchResponse> {
        debug!(prefix = %display_name_prefix, page, "Searching by global name");

        let mut body = HashMap::new();
        body.insert(
            "displayNamePrefix".to_string(),
            display_name_prefix.to_string(),
        );

        let endpoint = format!("/User/Search/GlobalName/{}/", page);
        let results: UserSearchResponse = self.call_response(&endpoint, Some(&body)).await?;

        debug!(
            hits = results.search_results.len(),
            has_more = results.has_more,
            "Search complete"
        );

        Ok(results)
    }

    async fn get_profile(
        &self,
        membership_type: i32,
        membership_id: &str,
    ) -> Result<ProfileResponse> {
        let endpoint = format!(
            "/Destiny2/{}/Profile/{}/?components={}",
            membership_type,
            segment(membership_id),
            PROFILE_COMPONENTS
        );
        self.call_response(&endpoint, None).await
    }

    async fn get_activity_history(
        &self,
        membership_type: i32,
        membership_id: &str,
        character_id: &str,
        query: ActivityHistoryQuery,
    ) -> Result<ActivityHistoryResponse> {
        let endpoint = format!(
            "/Destiny2/{}/Account/{}/Character/{}/Stats/Activities/?count={}&mode={}&page={}",
            membership_type,
            segment(membership_id),
            segment(character_id),
            query.count,
            query.mode,
            query.page
        );
        let history: ActivityHistoryResponse = self.call_response(&endpoint, None).await?;

        debug!(
            character_id = %character_id,
            activities = history.activities.len(),
            "Fetched activity history"
        );

        Ok(history)
    }
}
