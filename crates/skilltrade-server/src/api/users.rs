//! User API handlers.
//!
//! Plumbing CRUD for the profile records everything else embeds summaries
//! of; registration and login live outside this service.

use crate::api::{error_reply, response::ApiResponse, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use skilltrade_core::{models::User, services};

/// Request to create a new user
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub region: Option<String>,
    pub timezone: Option<String>,
    pub profile_picture_url: Option<String>,
}

/// Create a user profile
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), (StatusCode, String)> {
    let mut user = User::new(payload.name, payload.email);
    user.bio = payload.bio;
    user.region = payload.region;
    user.timezone = payload.timezone;
    user.profile_picture_url = payload.profile_picture_url;

    match services::users::create_user(&state, user).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(ApiResponse::ok(user)))),
        Err(e) => Err(error_reply(e)),
    }
}

/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, (StatusCode, String)> {
    match services::users::get_user(&state, &id).await {
        Ok(user) => Ok(Json(ApiResponse::ok(user))),
        Err(e) => Err(error_reply(e)),
    }
}

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, (StatusCode, String)> {
    match services::users::list_users(&state).await {
        Ok(users) => Ok(Json(ApiResponse::ok(users))),
        Err(e) => Err(error_reply(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltrade_core::AppCore;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    async fn create_test_app() -> (Arc<AppCore>, TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let app = Arc::new(AppCore::new(db_path.to_str().unwrap()).await.unwrap());
        (app, temp_dir)
    }

    fn request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            bio: None,
            region: None,
            timezone: None,
            profile_picture_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let (app, _temp_dir) = create_test_app().await;

        create_user(State(app.clone()), Json(request("Alice", "alice@example.com")))
            .await
            .unwrap();

        let users = list_users(State(app.clone())).await.unwrap().0.data.unwrap();
        assert_eq!(users.len(), 1);

        let fetched = get_user(State(app), Path(users[0].id.clone()))
            .await
            .unwrap()
            .0
            .data
            .unwrap();
        assert_eq!(fetched.name, "Alice");
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_404() {
        let (app, _temp_dir) = create_test_app().await;

        let result = get_user(State(app), Path("missing".to_string())).await;
        assert_eq!(result.unwrap_err().0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_400() {
        let (app, _temp_dir) = create_test_app().await;

        create_user(State(app.clone()), Json(request("Alice", "alice@example.com")))
            .await
            .unwrap();
        let result = create_user(State(app), Json(request("Alice2", "alice@example.com"))).await;
        assert_eq!(result.unwrap_err().0, StatusCode::BAD_REQUEST);
    }
}
