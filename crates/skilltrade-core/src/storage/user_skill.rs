//! Typed user-skill storage wrapper.
//!
//! The `find_*_in` scans are the document store's "filtered find": they feed
//! the compatibility engine with candidate rows from other users.

use crate::models::{UserSkill, UserSkillKind};
use anyhow::Result;
use redb::Database;
use std::collections::HashSet;
use std::sync::Arc;

/// Typed user-skill storage wrapper around skilltrade-storage::UserSkillStorage.
#[derive(Debug, Clone)]
pub struct UserSkillStorage {
    inner: skilltrade_storage::UserSkillStorage,
}

impl UserSkillStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        Ok(Self {
            inner: skilltrade_storage::UserSkillStorage::new(db)?,
        })
    }

    /// Create a new row (fails if the id already exists)
    pub fn create(&self, row: &UserSkill) -> Result<()> {
        if self.inner.exists(&row.id)? {
            return Err(anyhow::anyhow!("User skill {} already exists", row.id));
        }
        let json = serde_json::to_vec(row)?;
        self.inner.put_raw(&row.id, &json)
    }

    /// Get a row by ID
    pub fn get(&self, id: &str) -> Result<Option<UserSkill>> {
        if let Some(bytes) = self.inner.get_raw(id)? {
            Ok(Some(serde_json::from_slice(&bytes)?))
        } else {
            Ok(None)
        }
    }

    /// Update an existing row
    pub fn update(&self, id: &str, row: &UserSkill) -> Result<()> {
        if !self.inner.exists(id)? {
            return Err(anyhow::anyhow!("User skill {} not found", id));
        }
        let json = serde_json::to_vec(row)?;
        self.inner.put_raw(id, &json)
    }

    /// Delete a row, returns true if it existed
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.inner.delete(id)
    }

    /// One user's rows, optionally filtered by kind, newest first
    pub fn list_by_user(&self, user_id: &str, kind: Option<UserSkillKind>) -> Result<Vec<UserSkill>> {
        let mut rows = Vec::new();
        for (_, bytes) in self.inner.list_raw()? {
            let row: UserSkill = serde_json::from_slice(&bytes)?;
            if row.user_id != user_id {
                continue;
            }
            if let Some(kind) = kind
                && row.kind() != kind
            {
                continue;
            }
            rows.push(row);
        }
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    /// Active Offer rows by other users whose skill id is in the given set.
    pub fn find_offers_in(
        &self,
        skill_ids: &HashSet<String>,
        exclude_user: &str,
    ) -> Result<Vec<UserSkill>> {
        self.find_in(skill_ids, exclude_user, UserSkillKind::Offer)
    }

    /// Active Request rows by other users whose skill id is in the given set.
    pub fn find_wants_in(
        &self,
        skill_ids: &HashSet<String>,
        exclude_user: &str,
    ) -> Result<Vec<UserSkill>> {
        self.find_in(skill_ids, exclude_user, UserSkillKind::Request)
    }

    fn find_in(
        &self,
        skill_ids: &HashSet<String>,
        exclude_user: &str,
        kind: UserSkillKind,
    ) -> Result<Vec<UserSkill>> {
        let mut rows = Vec::new();
        for (_, bytes) in self.inner.list_raw()? {
            let row: UserSkill = serde_json::from_slice(&bytes)?;
            if row.user_id == exclude_user
                || row.kind() != kind
                || !row.is_active()
                || !skill_ids.contains(&row.skill_id)
            {
                continue;
            }
            rows.push(row);
        }
        // Scan order follows the table's key order; keep it deterministic for
        // the engine's tie-breaking by sorting on creation time.
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }
}
