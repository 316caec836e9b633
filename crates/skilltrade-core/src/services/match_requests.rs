//! Match request lifecycle and request-list projections.
//!
//! Sending merges into the pair's active request when one exists; responding
//! is receiver-only. The list projections tolerate deleted skill rows by
//! degrading the affected display fields to "N/A".

use crate::error::{CoreError, CoreResult};
use crate::models::{
    IncomingRequestView, MatchRequest, MatchRequestWithParties, MatchStatus, OfferedTermView,
    RequestedTermView, SentRequestView, SkillDetails, SkillTerm, UserSummary,
};
use crate::services::access;
use crate::AppCore;
use skilltrade_storage::time_utils;
use std::sync::Arc;

const NA: &str = "N/A";

/// Send a match request, or merge into the pair's active one.
///
/// Offered ids must resolve to rows owned by the sender, requested ids to
/// rows owned by the receiver. Returns the stored request with both parties'
/// summaries and whether it was newly created.
pub async fn send_or_update(
    core: &Arc<AppCore>,
    sender_id: &str,
    receiver_id: &str,
    offered_ids: &[String],
    requested_ids: &[String],
) -> CoreResult<(MatchRequestWithParties, bool)> {
    if receiver_id.trim().is_empty() || offered_ids.is_empty() || requested_ids.is_empty() {
        return Err(CoreError::validation("Missing required fields"));
    }
    if receiver_id == sender_id {
        return Err(CoreError::validation("Cannot send request to yourself"));
    }

    let sender = core
        .storage
        .users
        .get(sender_id)?
        .ok_or_else(|| CoreError::not_found("User"))?;
    let receiver = core
        .storage
        .users
        .get(receiver_id)?
        .ok_or_else(|| CoreError::not_found("User"))?;

    let offered = resolve_terms(core, offered_ids, sender_id, "Offered")?;
    let requested = resolve_terms(core, requested_ids, receiver_id, "Requested")?;

    let (request, created) =
        core.storage
            .match_requests
            .upsert_active(sender_id, receiver_id, offered, requested)?;

    Ok((
        MatchRequestWithParties {
            request,
            sender: sender.summary(),
            receiver: receiver.summary(),
        },
        created,
    ))
}

/// Respond to a match request. Receiver-only; "Accepted" or "Rejected".
pub async fn respond(
    core: &Arc<AppCore>,
    request_id: &str,
    responder_id: &str,
    status: &str,
) -> CoreResult<MatchRequest> {
    let new_status = MatchStatus::parse_response(status)
        .ok_or_else(|| CoreError::validation("Invalid status"))?;

    let mut request = core
        .storage
        .match_requests
        .get(request_id)?
        .ok_or_else(|| CoreError::not_found("Request"))?;
    access::ensure_receiver(&request, responder_id)?;

    // Accepted and Rejected are terminal; only a Pending request takes a
    // response. The authority check above runs first so a non-receiver always
    // sees the authorization error.
    if request.status != MatchStatus::Pending {
        return Err(CoreError::validation("Request already responded to"));
    }

    request.status = new_status;
    request.updated_at = time_utils::now_ms();
    core.storage.match_requests.update(&request)?;
    Ok(request)
}

/// Requests addressed to the given user, flattened for display.
pub async fn list_incoming(
    core: &Arc<AppCore>,
    user_id: &str,
) -> CoreResult<Vec<IncomingRequestView>> {
    let mut views = Vec::new();
    for request in core.storage.match_requests.list_by_receiver(user_id)? {
        let sender = party_summary(core, &request.sender_id)?;
        views.push(IncomingRequestView {
            id: request.id.clone(),
            sender,
            skills_offered: offered_term_views(core, &request.skills_offered)?,
            skills_requested: requested_term_views(core, &request.skills_requested)?,
            sent_at: request.created_at,
            status: request.status.as_lower().to_string(),
        });
    }
    Ok(views)
}

/// Requests sent by the given user, flattened for display.
pub async fn list_sent(core: &Arc<AppCore>, user_id: &str) -> CoreResult<Vec<SentRequestView>> {
    let mut views = Vec::new();
    for request in core.storage.match_requests.list_by_sender(user_id)? {
        let recipient = party_summary(core, &request.receiver_id)?;
        views.push(SentRequestView {
            id: request.id.clone(),
            recipient,
            skills_offered: offered_term_views(core, &request.skills_offered)?,
            skills_requested: requested_term_views(core, &request.skills_requested)?,
            sent_at: request.created_at,
            status: request.status.as_lower().to_string(),
        });
    }
    Ok(views)
}

fn resolve_terms(
    core: &Arc<AppCore>,
    ids: &[String],
    expected_owner: &str,
    role: &str,
) -> CoreResult<Vec<SkillTerm>> {
    let mut terms = Vec::new();
    for id in ids {
        let row = core
            .storage
            .user_skills
            .get(id)?
            .ok_or_else(|| CoreError::reference(format!("{} skill not found: {}", role, id)))?;
        if row.user_id != expected_owner {
            return Err(CoreError::reference(format!(
                "{} skill {} does not belong to the expected user",
                role, id
            )));
        }
        let skill_name = core
            .storage
            .skills
            .get(&row.skill_id)?
            .map(|skill| skill.name)
            .unwrap_or_else(|| "Unknown skill".to_string());
        terms.push(SkillTerm {
            user_skill_id: row.id,
            skill_id: row.skill_id,
            skill_name,
        });
    }
    Ok(terms)
}

/// Counterpart summary for a view; a vanished profile degrades to a
/// placeholder rather than failing the listing.
fn party_summary(core: &Arc<AppCore>, user_id: &str) -> CoreResult<UserSummary> {
    Ok(core
        .storage
        .users
        .get(user_id)?
        .map(|user| user.summary())
        .unwrap_or_else(|| UserSummary::placeholder(user_id)))
}

fn offered_term_views(
    core: &Arc<AppCore>,
    terms: &[SkillTerm],
) -> CoreResult<Vec<OfferedTermView>> {
    let mut views = Vec::new();
    for term in terms {
        let view = match core.storage.user_skills.get(&term.user_skill_id)? {
            Some(row) => {
                let name = display_name(core, term)?;
                match row.details {
                    SkillDetails::Offer {
                        proficiency_level,
                        availability,
                    } => OfferedTermView {
                        name,
                        proficiency_level: proficiency_level.as_str().to_string(),
                        availability,
                    },
                    // The row exists but points the other way; nothing to show.
                    SkillDetails::Request { .. } => OfferedTermView {
                        name,
                        proficiency_level: NA.to_string(),
                        availability: Vec::new(),
                    },
                }
            }
            None => OfferedTermView {
                name: term.skill_name.clone(),
                proficiency_level: NA.to_string(),
                availability: Vec::new(),
            },
        };
        views.push(view);
    }
    Ok(views)
}

fn requested_term_views(
    core: &Arc<AppCore>,
    terms: &[SkillTerm],
) -> CoreResult<Vec<RequestedTermView>> {
    let mut views = Vec::new();
    for term in terms {
        let view = match core.storage.user_skills.get(&term.user_skill_id)? {
            Some(row) => {
                let name = display_name(core, term)?;
                match row.details {
                    SkillDetails::Request {
                        desired_proficiency,
                        urgency,
                    } => RequestedTermView {
                        name,
                        desired_proficiency: desired_proficiency.as_str().to_string(),
                        urgency: urgency.as_str().to_string(),
                    },
                    SkillDetails::Offer { .. } => RequestedTermView {
                        name,
                        desired_proficiency: NA.to_string(),
                        urgency: NA.to_string(),
                    },
                }
            }
            None => RequestedTermView {
                name: term.skill_name.clone(),
                desired_proficiency: NA.to_string(),
                urgency: NA.to_string(),
            },
        };
        views.push(view);
    }
    Ok(views)
}

/// Current catalog name when resolvable, otherwise the snapshot taken when
/// the term was added.
fn display_name(core: &Arc<AppCore>, term: &SkillTerm) -> CoreResult<String> {
    Ok(core
        .storage
        .skills
        .get(&term.skill_id)?
        .map(|skill| skill.name)
        .unwrap_or_else(|| term.skill_name.clone()))
}
