//! Storage layer with typed wrappers around skilltrade-storage.
//!
//! This module provides type-safe access to the storage layer by wrapping
//! the byte-level APIs from skilltrade-storage with Rust types from our
//! models. Documents are JSON-encoded.

pub mod match_request;
pub mod skill;
pub mod user;
pub mod user_skill;

use anyhow::Result;
use redb::Database;
use std::sync::Arc;

pub use match_request::MatchRequestStorage;
pub use skill::SkillStorage;
pub use user::UserStorage;
pub use user_skill::UserSkillStorage;

/// Central storage manager that initializes all collections.
pub struct Storage {
    db: Arc<Database>,
    pub users: UserStorage,
    pub skills: SkillStorage,
    pub user_skills: UserSkillStorage,
    pub match_requests: MatchRequestStorage,
}

impl Storage {
    /// Create a new storage instance at the given path.
    pub fn new(path: &str) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);

        let users = UserStorage::new(db.clone())?;
        let skills = SkillStorage::new(db.clone())?;
        let user_skills = UserSkillStorage::new(db.clone())?;
        let match_requests = MatchRequestStorage::new(db.clone())?;

        Ok(Self {
            db,
            users,
            skills,
            user_skills,
            match_requests,
        })
    }

    /// Get a reference to the underlying database
    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}
