//! Denormalized request-list views.
//!
//! Each view flattens a match request, the counterpart's profile summary, and
//! per-term display attributes resolved live from the referenced skill rows.
//! Display fields for a deleted row degrade to "N/A" instead of failing the
//! whole projection, so they are plain strings here.

use serde::Serialize;
use ts_rs::TS;

use crate::models::UserSummary;

/// Display attributes for an offered exchange term.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct OfferedTermView {
    pub name: String,
    pub proficiency_level: String,
    pub availability: Vec<String>,
}

/// Display attributes for a requested exchange term.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RequestedTermView {
    pub name: String,
    pub desired_proficiency: String,
    pub urgency: String,
}

/// A request addressed to the viewing user.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct IncomingRequestView {
    pub id: String,
    pub sender: UserSummary,
    pub skills_offered: Vec<OfferedTermView>,
    pub skills_requested: Vec<RequestedTermView>,
    /// Timestamp when the request was created (milliseconds since epoch)
    #[ts(type = "number")]
    pub sent_at: i64,
    /// Lowercase status: "pending", "accepted" or "rejected".
    pub status: String,
}

/// A request the viewing user has sent.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SentRequestView {
    pub id: String,
    pub recipient: UserSummary,
    pub skills_offered: Vec<OfferedTermView>,
    pub skills_requested: Vec<RequestedTermView>,
    /// Timestamp when the request was created (milliseconds since epoch)
    #[ts(type = "number")]
    pub sent_at: i64,
    /// Lowercase status: "pending", "accepted" or "rejected".
    pub status: String,
}
