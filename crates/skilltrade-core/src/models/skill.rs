//! Canonical skill identities.
//!
//! A catalog entry is created the first time an "add skill" action references
//! a name not yet known, and is immutable afterwards. User-specific stances on
//! a skill live in [`super::user_skill::UserSkill`].

use serde::{Deserialize, Serialize};
use skilltrade_storage::time_utils;
use ts_rs::TS;
use uuid::Uuid;

/// A canonical skill, e.g. "React Development".
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Timestamp when the skill was created (milliseconds since epoch)
    #[ts(type = "number")]
    pub created_at: i64,
}

impl Skill {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            created_at: time_utils::now_ms(),
        }
    }
}
