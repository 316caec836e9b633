//! Compatibility matches API handler.

use crate::api::{auth::CurrentUser, error_reply, response::ApiResponse, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use skilltrade_core::{models::CompatibilityResult, services, CoreError};

/// Ranked compatibility results for the caller
pub async fn get_matches(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ApiResponse<Vec<CompatibilityResult>>>, (StatusCode, String)> {
    match services::matching::compute_matches(&state, &user_id).await {
        Ok(results) => Ok(Json(ApiResponse::ok(results))),
        Err(CoreError::Storage(source)) => {
            tracing::error!(error = ?source, "matching failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while matching users.".to_string(),
            ))
        }
        Err(e) => Err(error_reply(e)),
    }
}
