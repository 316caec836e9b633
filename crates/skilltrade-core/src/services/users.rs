//! User plumbing service.
//!
//! Registration and login live outside this core; these operations only
//! maintain the profile records everything else embeds summaries of.

use crate::error::{CoreError, CoreResult};
use crate::models::User;
use crate::AppCore;
use std::sync::Arc;

/// Create a user profile record
pub async fn create_user(core: &Arc<AppCore>, user: User) -> CoreResult<User> {
    if user.name.trim().is_empty() || user.email.trim().is_empty() {
        return Err(CoreError::validation("Name and email are required"));
    }
    if core.storage.users.find_by_email(&user.email)?.is_some() {
        return Err(CoreError::validation("Email already registered"));
    }

    core.storage.users.create(&user)?;
    Ok(user)
}

/// Get a user by ID
pub async fn get_user(core: &Arc<AppCore>, id: &str) -> CoreResult<User> {
    core.storage
        .users
        .get(id)?
        .ok_or_else(|| CoreError::not_found("User"))
}

/// List all users
pub async fn list_users(core: &Arc<AppCore>) -> CoreResult<Vec<User>> {
    Ok(core.storage.users.list()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    async fn create_test_core() -> (Arc<AppCore>, TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let core = Arc::new(AppCore::new(db_path.to_str().unwrap()).await.unwrap());
        (core, temp_dir)
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let (core, _temp_dir) = create_test_core().await;

        let user = create_user(
            &core,
            User::new("Alice".to_string(), "alice@example.com".to_string()),
        )
        .await
        .unwrap();

        let retrieved = get_user(&core, &user.id).await.unwrap();
        assert_eq!(retrieved.name, "Alice");
    }

    #[tokio::test]
    async fn test_create_user_requires_name_and_email() {
        let (core, _temp_dir) = create_test_core().await;

        let result = create_user(
            &core,
            User::new(String::new(), "alice@example.com".to_string()),
        )
        .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (core, _temp_dir) = create_test_core().await;

        create_user(
            &core,
            User::new("Alice".to_string(), "alice@example.com".to_string()),
        )
        .await
        .unwrap();

        let result = create_user(
            &core,
            User::new("Other Alice".to_string(), "Alice@Example.com".to_string()),
        )
        .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_unknown_user_not_found() {
        let (core, _temp_dir) = create_test_core().await;

        let result = get_user(&core, "missing").await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
