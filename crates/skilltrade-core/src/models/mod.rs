pub mod compatibility;
pub mod match_request;
pub mod skill;
pub mod user;
pub mod user_skill;
pub mod views;

pub use compatibility::{CompatibilityResult, MatchedOffer, MatchedWant};
pub use match_request::{MatchRequest, MatchRequestWithParties, MatchStatus, SkillTerm};
pub use skill::Skill;
pub use user::{User, UserSummary};
pub use user_skill::{
    ProficiencyLevel, SkillDetails, Urgency, UserSkill, UserSkillKind, UserSkillStatus,
};
pub use views::{IncomingRequestView, OfferedTermView, RequestedTermView, SentRequestView};
