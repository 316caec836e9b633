//! User-skill management service.
//!
//! Adding a skill resolves the catalog identity ad hoc: the first reference
//! to an unknown name creates it. All mutation goes through the ownership
//! predicate in [`super::access`].

use crate::error::{CoreError, CoreResult};
use crate::models::{Skill, SkillDetails, UserSkill, UserSkillKind, UserSkillStatus};
use crate::services::access;
use crate::AppCore;
use std::sync::Arc;

/// Partial update to a user-skill row. Absent fields stay untouched.
#[derive(Debug, Default)]
pub struct UserSkillPatch {
    pub description: Option<String>,
    pub status: Option<UserSkillStatus>,
    pub details: Option<SkillDetails>,
}

/// Declare a skill the owner offers or wants.
pub async fn add_skill(
    core: &Arc<AppCore>,
    owner_id: &str,
    name: &str,
    description: Option<String>,
    details: SkillDetails,
) -> CoreResult<UserSkill> {
    if name.trim().is_empty() {
        return Err(CoreError::validation("Skill name is required"));
    }
    if core.storage.users.get(owner_id)?.is_none() {
        return Err(CoreError::not_found("User"));
    }

    let skill = find_or_create_catalog_entry(core, name)?;
    let row = UserSkill::new(owner_id.to_string(), skill.id, description, details);
    core.storage.user_skills.create(&row)?;
    Ok(row)
}

/// The owner's rows, optionally filtered by kind, newest first.
pub async fn list_skills(
    core: &Arc<AppCore>,
    owner_id: &str,
    kind: Option<UserSkillKind>,
) -> CoreResult<Vec<UserSkill>> {
    Ok(core.storage.user_skills.list_by_user(owner_id, kind)?)
}

/// Apply a patch to an owned row. The kind of a row never changes; a patch
/// carrying the other kind's attributes is rejected.
pub async fn update_skill(
    core: &Arc<AppCore>,
    actor_id: &str,
    id: &str,
    patch: UserSkillPatch,
) -> CoreResult<UserSkill> {
    let mut row = core
        .storage
        .user_skills
        .get(id)?
        .ok_or_else(|| CoreError::not_found("Skill"))?;
    access::ensure_owner(&row, actor_id)?;

    if let Some(details) = patch.details {
        if details.kind() != row.kind() {
            return Err(CoreError::validation("Skill kind cannot be changed"));
        }
        row.details = details;
    }
    if let Some(description) = patch.description {
        row.description = Some(description);
    }
    if let Some(status) = patch.status {
        row.status = status;
    }

    core.storage.user_skills.update(id, &row)?;
    Ok(row)
}

/// Delete an owned row. Match requests referencing it keep their snapshots;
/// request views degrade instead of breaking.
pub async fn delete_skill(core: &Arc<AppCore>, actor_id: &str, id: &str) -> CoreResult<()> {
    let row = core
        .storage
        .user_skills
        .get(id)?
        .ok_or_else(|| CoreError::not_found("Skill"))?;
    access::ensure_owner(&row, actor_id)?;

    core.storage.user_skills.delete(id)?;
    Ok(())
}

fn find_or_create_catalog_entry(core: &Arc<AppCore>, name: &str) -> CoreResult<Skill> {
    if let Some(existing) = core.storage.skills.find_by_name(name)? {
        return Ok(existing);
    }
    let skill = Skill::new(name.to_string(), None);
    core.storage.skills.create(&skill)?;
    Ok(skill)
}
