//! User-skill API handlers.
//!
//! Declaring, listing, updating and withdrawing the caller's own skill rows.
//! The catalog identity behind a name is resolved by the service layer.

use crate::api::{auth::CurrentUser, error_reply, response::ApiResponse, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use skilltrade_core::{
    models::{SkillDetails, UserSkill, UserSkillKind, UserSkillStatus},
    services,
    services::user_skills::UserSkillPatch,
};

/// Request to declare a new skill
#[derive(Debug, Serialize, Deserialize)]
pub struct AddSkillRequest {
    pub name: String,
    pub description: Option<String>,
    /// Kind-specific attributes, tagged by `kind`.
    #[serde(flatten)]
    pub details: SkillDetails,
}

/// Request to update an owned skill row
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSkillRequest {
    pub description: Option<String>,
    pub status: Option<UserSkillStatus>,
    #[serde(flatten)]
    pub details: Option<SkillDetails>,
}

#[derive(Debug, Deserialize)]
pub struct ListSkillsQuery {
    pub kind: Option<UserSkillKind>,
}

/// Declare a skill the caller offers or wants
pub async fn add_skill(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<AddSkillRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match services::user_skills::add_skill(
        &state,
        &user_id,
        &payload.name,
        payload.description,
        payload.details,
    )
    .await
    {
        Ok(row) => Ok((StatusCode::CREATED, Json(ApiResponse::ok(row)))),
        Err(e) => Err(error_reply(e)),
    }
}

/// List the caller's skills, optionally filtered by kind
pub async fn list_my_skills(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ListSkillsQuery>,
) -> Result<Json<ApiResponse<Vec<UserSkill>>>, (StatusCode, String)> {
    match services::user_skills::list_skills(&state, &user_id, query.kind).await {
        Ok(rows) => Ok(Json(ApiResponse::ok(rows))),
        Err(e) => Err(error_reply(e)),
    }
}

/// Update an owned skill row
pub async fn update_skill(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSkillRequest>,
) -> Result<Json<ApiResponse<UserSkill>>, (StatusCode, String)> {
    let patch = UserSkillPatch {
        description: payload.description,
        status: payload.status,
        details: payload.details,
    };

    match services::user_skills::update_skill(&state, &user_id, &id, patch).await {
        Ok(row) => Ok(Json(ApiResponse::ok(row))),
        Err(e) => Err(error_reply(e)),
    }
}

/// Delete an owned skill row
pub async fn delete_skill(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, String)> {
    match services::user_skills::delete_skill(&state, &user_id, &id).await {
        Ok(()) => Ok(Json(ApiResponse::message("Skill deleted successfully"))),
        Err(e) => Err(error_reply(e)),
    }
}
