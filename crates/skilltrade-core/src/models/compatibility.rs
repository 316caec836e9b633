//! Compatibility results.
//!
//! Produced fresh on every matches query; never persisted.

use serde::Serialize;
use ts_rs::TS;

use crate::models::{ProficiencyLevel, Urgency, UserSummary};

/// A skill the candidate offers that the querying user wants.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct MatchedOffer {
    pub skill_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub proficiency_level: ProficiencyLevel,
}

/// A skill the candidate wants that the querying user offers.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct MatchedWant {
    pub skill_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub desired_proficiency: ProficiencyLevel,
    pub urgency: Urgency,
}

/// One candidate user with bidirectional skill overlap.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CompatibilityResult {
    pub user: UserSummary,
    /// Their offers matching my wants. Never empty in an emitted result.
    pub skills_offered: Vec<MatchedOffer>,
    /// Their wants matching my offers. Never empty in an emitted result.
    pub skills_requested: Vec<MatchedWant>,
    /// Total matched rows across both directions.
    pub compatibility_score: u32,
    /// Distinct matched skill names across both directions.
    pub mutual_interests: Vec<String>,
}
