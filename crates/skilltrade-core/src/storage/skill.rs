//! Typed skill catalog storage wrapper.

use crate::models::Skill;
use anyhow::Result;
use redb::Database;
use std::sync::Arc;

/// Typed catalog storage wrapper around skilltrade-storage::SkillStorage.
#[derive(Debug, Clone)]
pub struct SkillStorage {
    inner: skilltrade_storage::SkillStorage,
}

impl SkillStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        Ok(Self {
            inner: skilltrade_storage::SkillStorage::new(db)?,
        })
    }

    /// Create a new catalog entry (fails if the id already exists)
    pub fn create(&self, skill: &Skill) -> Result<()> {
        if self.inner.exists(&skill.id)? {
            return Err(anyhow::anyhow!("Skill {} already exists", skill.id));
        }
        let json = serde_json::to_vec(skill)?;
        self.inner.put_raw(&skill.id, &json)
    }

    /// Get a catalog entry by ID
    pub fn get(&self, id: &str) -> Result<Option<Skill>> {
        if let Some(bytes) = self.inner.get_raw(id)? {
            Ok(Some(serde_json::from_slice(&bytes)?))
        } else {
            Ok(None)
        }
    }

    /// Find a catalog entry by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Result<Option<Skill>> {
        for (_, bytes) in self.inner.list_raw()? {
            let skill: Skill = serde_json::from_slice(&bytes)?;
            if skill.name.eq_ignore_ascii_case(name) {
                return Ok(Some(skill));
            }
        }
        Ok(None)
    }

    /// List the whole catalog, newest first
    pub fn list(&self) -> Result<Vec<Skill>> {
        let mut skills = Vec::new();
        for (_, bytes) in self.inner.list_raw()? {
            let skill: Skill = serde_json::from_slice(&bytes)?;
            skills.push(skill);
        }
        skills.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(skills)
    }
}
