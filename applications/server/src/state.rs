/// Shared application state
use crate::config::ServerConfig;
use crate::error::Result;
use crate::services::{ActivityFilter, ActivityService, PlayerService};
use bungie_client::{BungieApi, BungieClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<PlayerService>,
    pub activities: Arc<ActivityService>,
}

impl AppState {
    pub fn new(players: Arc<PlayerService>, activities: Arc<ActivityService>) -> Self {
        Self {
            players,
            activities,
        }
    }

    /// Build services over a single upstream API.
    pub fn with_api(api: Arc<dyn BungieApi>, config: &ServerConfig) -> Self {
        let filter = ActivityFilter::new(
            &config.activities.normal_hashes,
            &config.activities.legend_hashes,
        );
        Self::new(
            Arc::new(PlayerService::new(Arc::clone(&api))),
            Arc::new(ActivityService::new(api, filter, config.activities.query())),
        )
    }

    /// Build services over a Bungie client created from `config`.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let client = BungieClient::new(config.bungie.client_config())?;
        Ok(Self::with_api(Arc::new(client), config))
    }
}
