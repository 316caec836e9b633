//! Compatibility engine.
//!
//! Finds users whose offers intersect the caller's wants and vice versa. A
//! candidate only qualifies when the overlap runs in both directions; the
//! score counts every matched row regardless of direction.

use crate::error::CoreResult;
use crate::models::{
    CompatibilityResult, MatchedOffer, MatchedWant, SkillDetails, UserSkill, UserSkillKind,
};
use crate::AppCore;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

struct Accumulator {
    offered_to_me: Vec<MatchedOffer>,
    wanted_from_me: Vec<MatchedWant>,
    score: u32,
    matched_names: Vec<String>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            offered_to_me: Vec::new(),
            wanted_from_me: Vec::new(),
            score: 0,
            matched_names: Vec::new(),
        }
    }

    fn note_match(&mut self, name: &str) {
        if !self.matched_names.iter().any(|n| n == name) {
            self.matched_names.push(name.to_string());
        }
        self.score += 1;
    }
}

/// Compute ranked compatibility results for the given user.
pub async fn compute_matches(
    core: &Arc<AppCore>,
    current_user_id: &str,
) -> CoreResult<Vec<CompatibilityResult>> {
    // 1. The caller's own active declarations, split by direction.
    let mine = core
        .storage
        .user_skills
        .list_by_user(current_user_id, None)?;

    let mut wanted_skill_ids = HashSet::new();
    let mut offered_skill_ids = HashSet::new();
    for row in mine.iter().filter(|row| row.is_active()) {
        match row.kind() {
            UserSkillKind::Request => wanted_skill_ids.insert(row.skill_id.clone()),
            UserSkillKind::Offer => offered_skill_ids.insert(row.skill_id.clone()),
        };
    }

    // A user with nothing wanted or nothing offered can never satisfy the
    // both-directions rule.
    if wanted_skill_ids.is_empty() || offered_skill_ids.is_empty() {
        return Ok(Vec::new());
    }

    // 2. Candidate rows from other users; the two queries are independent.
    let offers_to_me = core
        .storage
        .user_skills
        .find_offers_in(&wanted_skill_ids, current_user_id)?;
    let wants_from_me = core
        .storage
        .user_skills
        .find_wants_in(&offered_skill_ids, current_user_id)?;

    // 3. Aggregate per candidate, preserving discovery order.
    let mut order: Vec<String> = Vec::new();
    let mut accumulators: HashMap<String, Accumulator> = HashMap::new();

    for row in &offers_to_me {
        let Some(entry) = offered_entry(core, row)? else {
            continue;
        };
        let acc = accumulator_for(&mut accumulators, &mut order, &row.user_id);
        acc.note_match(&entry.name);
        acc.offered_to_me.push(entry);
    }
    for row in &wants_from_me {
        let Some(entry) = wanted_entry(core, row)? else {
            continue;
        };
        let acc = accumulator_for(&mut accumulators, &mut order, &row.user_id);
        acc.note_match(&entry.name);
        acc.wanted_from_me.push(entry);
    }

    // 4. Emit candidates with overlap in both directions, ranked by score.
    let mut results = Vec::new();
    for candidate_id in order {
        let Some(acc) = accumulators.remove(&candidate_id) else {
            continue;
        };
        if acc.offered_to_me.is_empty() || acc.wanted_from_me.is_empty() {
            continue;
        }
        let Some(user) = core.storage.users.get(&candidate_id)? else {
            debug!(%candidate_id, "skipping candidate without profile record");
            continue;
        };
        results.push(CompatibilityResult {
            user: user.summary(),
            skills_offered: acc.offered_to_me,
            skills_requested: acc.wanted_from_me,
            compatibility_score: acc.score,
            mutual_interests: acc.matched_names,
        });
    }

    // Stable sort keeps discovery order among equal scores.
    results.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
    Ok(results)
}

fn accumulator_for<'a>(
    accumulators: &'a mut HashMap<String, Accumulator>,
    order: &mut Vec<String>,
    user_id: &str,
) -> &'a mut Accumulator {
    accumulators.entry(user_id.to_string()).or_insert_with(|| {
        order.push(user_id.to_string());
        Accumulator::new()
    })
}

fn offered_entry(core: &Arc<AppCore>, row: &UserSkill) -> CoreResult<Option<MatchedOffer>> {
    let Some(catalog) = core.storage.skills.get(&row.skill_id)? else {
        return Ok(None);
    };
    let SkillDetails::Offer {
        proficiency_level, ..
    } = &row.details
    else {
        return Ok(None);
    };
    Ok(Some(MatchedOffer {
        skill_id: catalog.id,
        name: catalog.name,
        description: row.description.clone().or(catalog.description),
        proficiency_level: *proficiency_level,
    }))
}

fn wanted_entry(core: &Arc<AppCore>, row: &UserSkill) -> CoreResult<Option<MatchedWant>> {
    let Some(catalog) = core.storage.skills.get(&row.skill_id)? else {
        return Ok(None);
    };
    let SkillDetails::Request {
        desired_proficiency,
        urgency,
    } = &row.details
    else {
        return Ok(None);
    };
    Ok(Some(MatchedWant {
        skill_id: catalog.id,
        name: catalog.name,
        description: row.description.clone().or(catalog.description),
        desired_proficiency: *desired_proficiency,
        urgency: *urgency,
    }))
}
