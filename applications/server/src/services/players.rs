/// Player resolver - global name search aggregated into user records
use crate::error::Result;
use crate::models::{AlternateName, Character, User};
use bungie_client::{
    membership_type_label, BungieApi, DestinyCharacter, ProfileResponse, UserInfoCard,
    UserSearchResponseDetail,
};
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// Why a search hit did not become a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The account has no platform membership to look up
    NoMembership,
    /// The profile lookup for the first membership failed
    ProfileUnavailable,
    /// No id in the profile's character list matched a character
    NoCharacters,
    /// Neither the profile, the hit nor the membership carried a name
    NoDisplayName,
}

#[derive(Clone)]
pub struct PlayerService {
    api: Arc<dyn BungieApi>,
}

impl PlayerService {
    pub fn new(api: Arc<dyn BungieApi>) -> Self {
        Self { api }
    }

    /// Search accounts by display name prefix and resolve each hit.
    ///
    /// Only a failure of the search call itself is an error. Hits that cannot
    /// be resolved are left out; output order follows the search results.
    pub async fn resolve_by_name(
        &self,
        name_prefix: &str,
        page: u32,
        include_characters: bool,
    ) -> Result<Vec<User>> {
        let search = self.api.search_by_global_name(name_prefix, page).await?;

        let resolutions = join_all(
            search
                .search_results
                .iter()
                .map(|hit| self.resolve_candidate(hit, include_characters)),
        )
        .await;

        let users: Vec<User> = resolutions.into_iter().filter_map(|r| r.ok()).collect();

        debug!(
            prefix = %name_prefix,
            page,
            hits = search.search_results.len(),
            resolved = users.len(),
            "Resolved players"
        );

        Ok(users)
    }

    /// Resolve a single search hit.
    pub async fn resolve_candidate(
        &self,
        hit: &UserSearchResponseDetail,
        include_characters: bool,
    ) -> std::result::Result<User, SkipReason> {
        let membership = hit
            .destiny_memberships
            .first()
            .ok_or(SkipReason::NoMembership)?;

        let profile = match self
            .api
            .get_profile(membership.membership_type, &membership.membership_id)
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                warn!(
                    membership_id = %membership.membership_id,
                    membership_type = membership.membership_type,
                    error = %e,
                    "Skipping search hit, profile unavailable"
                );
                return Err(SkipReason::ProfileUnavailable);
            }
        };

        build_user(hit, &profile, include_characters)
    }
}

/// Reduce a search hit and the first membership's profile to a [`User`].
pub fn build_user(
    hit: &UserSearchResponseDetail,
    profile: &ProfileResponse,
    include_characters: bool,
) -> std::result::Result<User, SkipReason> {
    let membership = hit
        .destiny_memberships
        .first()
        .ok_or(SkipReason::NoMembership)?;

    let characters = ordered_characters(profile);
    let first = characters.first().ok_or(SkipReason::NoCharacters)?;

    let display_name = display_name(hit, membership, profile).ok_or(SkipReason::NoDisplayName)?;

    Ok(User {
        display_name,
        display_name_code: hit.bungie_global_display_name_code,
        membership_id: membership.membership_id.clone(),
        membership_type: membership.membership_type,
        // First character's emblem, not the highest-light one's
        emblem_path: first.emblem_background_path.clone(),
        light: highest_light(&characters),
        names: alternate_names(&hit.destiny_memberships),
        characters: include_characters
            .then(|| characters.iter().map(|c| Character::from(*c)).collect()),
    })
}

/// Characters in the profile's `characterIds` order; ids with no entry are dropped.
pub fn ordered_characters(profile: &ProfileResponse) -> Vec<&DestinyCharacter> {
    let Some(ids) = profile
        .profile
        .as_ref()
        .and_then(|p| p.data.as_ref())
        .map(|data| &data.character_ids)
    else {
        return Vec::new();
    };
    let Some(characters) = profile.characters.as_ref().map(|c| &c.data) else {
        return Vec::new();
    };

    ids.iter().filter_map(|id| characters.get(id)).collect()
}

/// Highest light across `characters`, or the first character's light when that is zero.
pub fn highest_light(characters: &[&DestinyCharacter]) -> i32 {
    let max = characters.iter().map(|c| c.light).max().unwrap_or(0);
    if max != 0 {
        return max;
    }
    characters.first().map(|c| c.light).unwrap_or(0)
}

/// One labelled name per membership, in membership order.
pub fn alternate_names(memberships: &[UserInfoCard]) -> Vec<AlternateName> {
    memberships
        .iter()
        .map(|m| AlternateName {
            platform: membership_type_label(m.membership_type).to_string(),
            membership_type: m.membership_type,
            display_name: m.display_name.clone(),
        })
        .collect()
}

fn display_name(
    hit: &UserSearchResponseDetail,
    membership: &UserInfoCard,
    profile: &ProfileResponse,
) -> Option<String> {
    let from_profile = profile
        .profile
        .as_ref()
        .and_then(|p| p.data.as_ref())
        .and_then(|data| data.user_info.as_ref())
        .and_then(|info| info.bungie_global_display_name.as_deref());

    [
        from_profile,
        Some(hit.bungie_global_display_name.as_str()),
        Some(membership.display_name.as_str()),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|name| !name.is_empty())
    .map(str::to_string)
}
