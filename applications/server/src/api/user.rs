/// User API routes
use crate::{
    error::{Result, ServerError},
    models::{Activity, User},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserByGlobalNameRequest {
    pub display_name: String,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default = "default_include_characters")]
    pub include_characters: bool,
}

fn default_include_characters() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserOnslaughtHistoryRequest {
    pub membership_id: String,
    pub membership_type: i32,
    #[serde(default)]
    pub character_ids: Vec<String>,
}

/// POST /api/user/getUserByGlobalName
/// Search players by display name prefix
pub async fn get_user_by_global_name(
    State(app_state): State<AppState>,
    Json(req): Json<GetUserByGlobalNameRequest>,
) -> Result<Json<Vec<User>>> {
    let display_name = req.display_name.trim();
    if display_name.is_empty() {
        return Err(ServerError::BadRequest(
            "displayName must not be empty".to_string(),
        ));
    }

    let users = app_state
        .players
        .resolve_by_name(display_name, req.page.unwrap_or(0), req.include_characters)
        .await?;
    Ok(Json(users))
}

/// POST /api/user/getUserOnslaughtHistory
/// Onslaught activity history across the given characters, newest first
pub async fn get_user_onslaught_history(
    State(app_state): State<AppState>,
    Json(req): Json<GetUserOnslaughtHistoryRequest>,
) -> Result<Json<Vec<Activity>>> {
    let membership_id = req.membership_id.trim();
    if membership_id.is_empty() {
        return Err(ServerError::BadRequest(
            "membershipId must not be empty".to_string(),
        ));
    }

    let activities = app_state
        .activities
        .resolve_onslaught_history(membership_id, req.membership_type, &req.character_ids)
        .await?;
    Ok(Json(activities))
}
