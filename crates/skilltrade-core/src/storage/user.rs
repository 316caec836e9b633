//! Typed user storage wrapper.

use crate::models::User;
use anyhow::Result;
use redb::Database;
use std::sync::Arc;

/// Typed user storage wrapper around skilltrade-storage::UserStorage.
#[derive(Debug, Clone)]
pub struct UserStorage {
    inner: skilltrade_storage::UserStorage,
}

impl UserStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        Ok(Self {
            inner: skilltrade_storage::UserStorage::new(db)?,
        })
    }

    /// Create a new user (fails if the id already exists)
    pub fn create(&self, user: &User) -> Result<()> {
        if self.inner.exists(&user.id)? {
            return Err(anyhow::anyhow!("User {} already exists", user.id));
        }
        let json = serde_json::to_vec(user)?;
        self.inner.put_raw(&user.id, &json)
    }

    /// Get a user by ID
    pub fn get(&self, id: &str) -> Result<Option<User>> {
        if let Some(bytes) = self.inner.get_raw(id)? {
            Ok(Some(serde_json::from_slice(&bytes)?))
        } else {
            Ok(None)
        }
    }

    /// List all users, newest first
    pub fn list(&self) -> Result<Vec<User>> {
        let mut users = Vec::new();
        for (_, bytes) in self.inner.list_raw()? {
            let user: User = serde_json::from_slice(&bytes)?;
            users.push(user);
        }
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    /// Find a user by email, ignoring case
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        for (_, bytes) in self.inner.list_raw()? {
            let user: User = serde_json::from_slice(&bytes)?;
            if user.email.eq_ignore_ascii_case(email) {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }
}
