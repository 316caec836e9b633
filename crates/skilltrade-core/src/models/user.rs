//! User profile model.
//!
//! Identity and authentication live outside this core; a user here is a plain
//! profile record addressed by the id the session layer hands us.

use serde::{Deserialize, Serialize};
use skilltrade_storage::time_utils;
use ts_rs::TS;
use uuid::Uuid;

/// A registered platform user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    /// Reputation earned from completed exchanges.
    #[serde(default)]
    pub karma_points: u32,
    /// Timestamp when the user was created (milliseconds since epoch)
    #[ts(type = "number")]
    pub created_at: i64,
    /// Timestamp when the user was last updated (milliseconds since epoch)
    #[ts(type = "number")]
    pub updated_at: i64,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        let now = time_utils::now_ms();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            bio: None,
            region: None,
            timezone: None,
            profile_picture_url: None,
            karma_points: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// The profile snapshot embedded in compatibility results and request
    /// views.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            bio: self.bio.clone(),
            region: self.region.clone(),
            timezone: self.timezone.clone(),
            profile_picture_url: self.profile_picture_url.clone(),
            karma_points: self.karma_points,
        }
    }
}

/// Trimmed profile snapshot for embedding in other payloads.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    pub karma_points: u32,
}

impl UserSummary {
    /// Stand-in summary for a counterpart whose profile record is gone.
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: "Unknown user".to_string(),
            bio: None,
            region: None,
            timezone: None,
            profile_picture_url: None,
            karma_points: 0,
        }
    }
}
