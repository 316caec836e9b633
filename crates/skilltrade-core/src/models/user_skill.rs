//! Per-user skill declarations.
//!
//! A `UserSkill` is one user's stance on one catalog skill: either an offer to
//! teach it or a request to learn it. The two attribute groups are a tagged
//! union, so exactly one group exists for any row by construction.

use serde::{Deserialize, Serialize};
use skilltrade_storage::time_utils;
use ts_rs::TS;
use uuid::Uuid;

/// Self-assessed or desired proficiency in a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// How urgently a requested skill is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Row lifecycle status. Archived rows are invisible to matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub enum UserSkillStatus {
    #[default]
    Active,
    Archived,
}

/// Direction of a user-skill row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UserSkillKind {
    Offer,
    Request,
}

/// Kind-specific attributes. The tag doubles as the row's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "lowercase")]
#[ts(export)]
pub enum SkillDetails {
    Offer {
        proficiency_level: ProficiencyLevel,
        /// Time-slot labels the owner can teach in, e.g. "weekday evenings".
        #[serde(default)]
        availability: Vec<String>,
    },
    Request {
        desired_proficiency: ProficiencyLevel,
        urgency: Urgency,
    },
}

impl SkillDetails {
    pub fn kind(&self) -> UserSkillKind {
        match self {
            Self::Offer { .. } => UserSkillKind::Offer,
            Self::Request { .. } => UserSkillKind::Request,
        }
    }
}

/// One user's stance on one catalog skill.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserSkill {
    pub id: String,
    pub user_id: String,
    pub skill_id: String,
    /// Optional override of the catalog skill's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: UserSkillStatus,
    pub details: SkillDetails,
    /// Timestamp when the row was created (milliseconds since epoch)
    #[ts(type = "number")]
    pub created_at: i64,
}

impl UserSkill {
    pub fn new(
        user_id: String,
        skill_id: String,
        description: Option<String>,
        details: SkillDetails,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            skill_id,
            description,
            status: UserSkillStatus::Active,
            details,
            created_at: time_utils::now_ms(),
        }
    }

    pub fn kind(&self) -> UserSkillKind {
        self.details.kind()
    }

    pub fn is_active(&self) -> bool {
        self.status == UserSkillStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer_details() -> SkillDetails {
        SkillDetails::Offer {
            proficiency_level: ProficiencyLevel::Advanced,
            availability: vec!["weekends".to_string()],
        }
    }

    #[test]
    fn test_kind_follows_details() {
        let offer = UserSkill::new("u1".to_string(), "s1".to_string(), None, offer_details());
        assert_eq!(offer.kind(), UserSkillKind::Offer);

        let request = UserSkill::new(
            "u1".to_string(),
            "s1".to_string(),
            None,
            SkillDetails::Request {
                desired_proficiency: ProficiencyLevel::Beginner,
                urgency: Urgency::High,
            },
        );
        assert_eq!(request.kind(), UserSkillKind::Request);
    }

    #[test]
    fn test_new_rows_are_active() {
        let row = UserSkill::new("u1".to_string(), "s1".to_string(), None, offer_details());
        assert!(row.is_active());
    }

    #[test]
    fn test_details_tag_round_trip() {
        let row = UserSkill::new(
            "u1".to_string(),
            "s1".to_string(),
            Some("can teach basics".to_string()),
            offer_details(),
        );

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"kind\":\"offer\""));

        let parsed: UserSkill = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind(), UserSkillKind::Offer);
        assert_eq!(parsed.details, row.details);
    }
}
