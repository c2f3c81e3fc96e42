/// Activity history resolver - Onslaught runs across a player's characters
use crate::error::Result;
use crate::models::Activity;
use bungie_client::{ActivityHistoryQuery, BungieApi};
use futures_util::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Activity definition hashes of the normal Onslaught playlist.
pub const ONSLAUGHT_NORMAL_HASHES: &[u32] = &[2064836415];

/// Activity definition hashes of the Legend Onslaught playlist.
pub const ONSLAUGHT_LEGEND_HASHES: &[u32] = &[3439345485];

/// Which activity definitions count as Onslaught runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFilter {
    allowed: HashSet<u32>,
}

impl ActivityFilter {
    /// Allow the union of the normal and legend hash lists.
    pub fn new(normal_hashes: &[u32], legend_hashes: &[u32]) -> Self {
        Self {
            allowed: normal_hashes
                .iter()
                .chain(legend_hashes)
                .copied()
                .collect(),
        }
    }

    pub fn allows(&self, activity: &Activity) -> bool {
        self.allowed.contains(&activity.activity_details.reference_id)
    }
}

impl Default for ActivityFilter {
    fn default() -> Self {
        Self::new(ONSLAUGHT_NORMAL_HASHES, ONSLAUGHT_LEGEND_HASHES)
    }
}

#[derive(Clone)]
pub struct ActivityService {
    api: Arc<dyn BungieApi>,
    filter: ActivityFilter,
    query: ActivityHistoryQuery,
}

impl ActivityService {
    pub fn new(
        api: Arc<dyn BungieApi>,
        filter: ActivityFilter,
        query: ActivityHistoryQuery,
    ) -> Self {
        Self { api, filter, query }
    }

    /// Fetch, filter and merge the Onslaught history of the given characters.
    ///
    /// Blank character ids are ignored. The first failed fetch fails the whole
    /// call. The result is sorted newest first; entries with equal timestamps
    /// keep character order.
    pub async fn resolve_onslaught_history(
        &self,
        membership_id: &str,
        membership_type: i32,
        character_ids: &[String],
    ) -> Result<Vec<Activity>> {
        let character_ids: Vec<&str> = character_ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .collect();

        let histories = join_all(character_ids.iter().map(|character_id| {
            self.api
                .get_activity_history(membership_type, membership_id, character_id, self.query)
        }))
        .await;

        let mut merged = Vec::new();
        for (character_id, history) in character_ids.iter().zip(histories) {
            let history = history?;
            let fetched = history.activities.len();
            let before = merged.len();
            merged.extend(
                history
                    .activities
                    .into_iter()
                    .filter(|activity| self.filter.allows(activity)),
            );
            debug!(
                character_id = %character_id,
                fetched,
                kept = merged.len() - before,
                "Filtered character history"
            );
        }

        sort_newest_first(&mut merged);
        Ok(merged)
    }
}

/// Stable sort by `period`, newest first.
pub fn sort_newest_first(activities: &mut [Activity]) {
    activities.sort_by(|a, b| b.period.cmp(&a.period));
}
