//! Centralized mutation-authority checks.
//!
//! Every write path goes through one of these predicates instead of inline
//! id comparisons scattered per handler.

use crate::error::{CoreError, CoreResult};
use crate::models::{MatchRequest, UserSkill};

/// A user-skill row may only be mutated by its owner.
pub fn ensure_owner(row: &UserSkill, actor_id: &str) -> CoreResult<()> {
    if row.user_id == actor_id {
        Ok(())
    } else {
        Err(CoreError::forbidden("Not authorized"))
    }
}

/// Only the receiver of a match request may respond to it.
pub fn ensure_receiver(request: &MatchRequest, actor_id: &str) -> CoreResult<()> {
    if request.receiver_id == actor_id {
        Ok(())
    } else {
        Err(CoreError::forbidden("Not authorized"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchRequest, ProficiencyLevel, SkillDetails, UserSkill};

    #[test]
    fn test_ensure_owner() {
        let row = UserSkill::new(
            "alice".to_string(),
            "python".to_string(),
            None,
            SkillDetails::Offer {
                proficiency_level: ProficiencyLevel::Advanced,
                availability: Vec::new(),
            },
        );

        assert!(ensure_owner(&row, "alice").is_ok());
        assert!(matches!(
            ensure_owner(&row, "bob"),
            Err(CoreError::Forbidden(_))
        ));
    }

    #[test]
    fn test_ensure_receiver() {
        let request = MatchRequest::new(
            "alice".to_string(),
            "bob".to_string(),
            Vec::new(),
            Vec::new(),
        );

        assert!(ensure_receiver(&request, "bob").is_ok());
        assert!(matches!(
            ensure_receiver(&request, "alice"),
            Err(CoreError::Forbidden(_))
        ));
    }
}
