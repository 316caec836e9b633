//! Match request documents.
//!
//! A match request is a proposed exchange between two users. Its exchange
//! terms embed a denormalized skill-name snapshot taken at insertion time, so
//! request lists stay displayable even after a referenced skill row is
//! deleted. Matching and authorization always go through ids, never the
//! cached name.

use serde::{Deserialize, Serialize};
use skilltrade_storage::time_utils;
use ts_rs::TS;
use uuid::Uuid;

use crate::models::UserSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MatchStatus {
    Pending,
    Accepted,
    Rejected,
}

impl MatchStatus {
    /// Pending and Accepted requests block new requests for the same pair;
    /// Rejected ones do not.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Accepted)
    }

    /// Lowercase form used by the request-list views.
    pub fn as_lower(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a receiver response. Only Accepted and Rejected are valid
    /// responses; anything else (including "Pending") is not.
    pub fn parse_response(value: &str) -> Option<Self> {
        match value {
            "Accepted" => Some(Self::Accepted),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// One exchange term: a reference to the originating user-skill row plus the
/// catalog identity and a display-name snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkillTerm {
    pub user_skill_id: String,
    pub skill_id: String,
    pub skill_name: String,
}

/// A proposed exchange between a sender and a receiver.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchRequest {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    /// Terms backed by the sender's skill rows.
    pub skills_offered: Vec<SkillTerm>,
    /// Terms backed by the receiver's skill rows.
    pub skills_requested: Vec<SkillTerm>,
    pub status: MatchStatus,
    /// Timestamp when the request was created (milliseconds since epoch)
    #[ts(type = "number")]
    pub created_at: i64,
    /// Timestamp of the last merge or status change (milliseconds since epoch)
    #[ts(type = "number")]
    pub updated_at: i64,
}

impl MatchRequest {
    /// Create a fresh Pending request. Initial term lists are de-duplicated
    /// by skill id, first-seen entry wins.
    pub fn new(
        sender_id: String,
        receiver_id: String,
        offered: Vec<SkillTerm>,
        requested: Vec<SkillTerm>,
    ) -> Self {
        let now = time_utils::now_ms();
        let mut request = Self {
            id: Uuid::new_v4().to_string(),
            sender_id,
            receiver_id,
            skills_offered: Vec::new(),
            skills_requested: Vec::new(),
            status: MatchStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        union_by_skill(&mut request.skills_offered, offered);
        union_by_skill(&mut request.skills_requested, requested);
        request
    }

    /// Union new terms into the existing lists without duplicating a skill id.
    /// Status is untouched; a re-send never revives or demotes a request.
    pub fn merge_terms(&mut self, offered: Vec<SkillTerm>, requested: Vec<SkillTerm>) {
        union_by_skill(&mut self.skills_offered, offered);
        union_by_skill(&mut self.skills_requested, requested);
        self.updated_at = time_utils::now_ms();
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

fn union_by_skill(existing: &mut Vec<SkillTerm>, incoming: Vec<SkillTerm>) {
    for term in incoming {
        if !existing.iter().any(|t| t.skill_id == term.skill_id) {
            existing.push(term);
        }
    }
}

/// A stored request plus both parties' profile summaries, as returned to the
/// sender after a create or merge.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct MatchRequestWithParties {
    pub request: MatchRequest,
    pub sender: UserSummary,
    pub receiver: UserSummary,
}
