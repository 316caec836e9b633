//! Typed match request storage wrapper.
//!
//! `upsert_active` is the one write path for sending requests: the
//! active-pair lookup and the merge-or-insert both happen inside the byte
//! layer's single write transaction, so concurrent sends for the same ordered
//! pair serialize instead of both creating.

use crate::models::{MatchRequest, SkillTerm};
use anyhow::Result;
use redb::Database;
use std::sync::Arc;

/// Typed match request storage wrapper around
/// skilltrade-storage::MatchRequestStorage.
#[derive(Debug, Clone)]
pub struct MatchRequestStorage {
    inner: skilltrade_storage::MatchRequestStorage,
}

impl MatchRequestStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        Ok(Self {
            inner: skilltrade_storage::MatchRequestStorage::new(db)?,
        })
    }

    /// Get a request by ID
    pub fn get(&self, id: &str) -> Result<Option<MatchRequest>> {
        if let Some(bytes) = self.inner.get_raw(id)? {
            Ok(Some(serde_json::from_slice(&bytes)?))
        } else {
            Ok(None)
        }
    }

    /// Update an existing request
    pub fn update(&self, request: &MatchRequest) -> Result<()> {
        if !self.inner.exists(&request.id)? {
            return Err(anyhow::anyhow!("Match request {} not found", request.id));
        }
        let json = serde_json::to_vec(request)?;
        self.inner.put_raw(&request.id, &json)
    }

    /// Requests addressed to the given user, newest first
    pub fn list_by_receiver(&self, user_id: &str) -> Result<Vec<MatchRequest>> {
        self.list_where(|request| request.receiver_id == user_id)
    }

    /// Requests sent by the given user, newest first
    pub fn list_by_sender(&self, user_id: &str) -> Result<Vec<MatchRequest>> {
        self.list_where(|request| request.sender_id == user_id)
    }

    /// The Pending or Accepted request for an ordered pair, if any.
    pub fn find_active_between(
        &self,
        sender_id: &str,
        receiver_id: &str,
    ) -> Result<Option<MatchRequest>> {
        for (_, bytes) in self.inner.list_raw()? {
            let request: MatchRequest = serde_json::from_slice(&bytes)?;
            if request.sender_id == sender_id
                && request.receiver_id == receiver_id
                && request.is_active()
            {
                return Ok(Some(request));
            }
        }
        Ok(None)
    }

    /// Merge the given terms into the pair's active request, or create a
    /// fresh Pending one. Lookup and write share one transaction; returns the
    /// stored request and whether it was newly created.
    pub fn upsert_active(
        &self,
        sender_id: &str,
        receiver_id: &str,
        offered: Vec<SkillTerm>,
        requested: Vec<SkillTerm>,
    ) -> Result<(MatchRequest, bool)> {
        let mut created = false;
        let written = self.inner.update_with(|rows| {
            let mut existing = None;
            for (_, bytes) in &rows {
                let request: MatchRequest = serde_json::from_slice(bytes)?;
                if request.sender_id == sender_id
                    && request.receiver_id == receiver_id
                    && request.is_active()
                {
                    existing = Some(request);
                    break;
                }
            }

            let request = match existing {
                Some(mut request) => {
                    request.merge_terms(offered, requested);
                    request
                }
                None => {
                    created = true;
                    MatchRequest::new(
                        sender_id.to_string(),
                        receiver_id.to_string(),
                        offered,
                        requested,
                    )
                }
            };

            let data = serde_json::to_vec(&request)?;
            Ok((request.id, data))
        })?;

        let request: MatchRequest = serde_json::from_slice(&written)?;
        Ok((request, created))
    }

    fn list_where(&self, keep: impl Fn(&MatchRequest) -> bool) -> Result<Vec<MatchRequest>> {
        let mut requests = Vec::new();
        for (_, bytes) in self.inner.list_raw()? {
            let request: MatchRequest = serde_json::from_slice(&bytes)?;
            if keep(&request) {
                requests.push(request);
            }
        }
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchStatus;
    use tempfile::tempdir;

    fn setup() -> (MatchRequestStorage, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = MatchRequestStorage::new(db).unwrap();
        (storage, temp_dir)
    }

    fn term(user_skill_id: &str, skill_id: &str) -> SkillTerm {
        SkillTerm {
            user_skill_id: user_skill_id.to_string(),
            skill_id: skill_id.to_string(),
            skill_name: skill_id.to_string(),
        }
    }

    #[test]
    fn test_upsert_creates_then_merges() {
        let (storage, _temp_dir) = setup();

        let (first, created) = storage
            .upsert_active(
                "alice",
                "bob",
                vec![term("us1", "python")],
                vec![term("us2", "design")],
            )
            .unwrap();
        assert!(created);
        assert_eq!(first.status, MatchStatus::Pending);

        let (second, created) = storage
            .upsert_active(
                "alice",
                "bob",
                vec![term("us3", "rust")],
                vec![term("us2", "design")],
            )
            .unwrap();
        assert!(!created);
        assert_eq!(second.id, first.id);
        assert_eq!(second.skills_offered.len(), 2);
        assert_eq!(second.skills_requested.len(), 1);
    }

    #[test]
    fn test_upsert_ignores_rejected_requests() {
        let (storage, _temp_dir) = setup();

        let (mut first, _) = storage
            .upsert_active(
                "alice",
                "bob",
                vec![term("us1", "python")],
                vec![term("us2", "design")],
            )
            .unwrap();
        first.status = MatchStatus::Rejected;
        storage.update(&first).unwrap();

        let (second, created) = storage
            .upsert_active(
                "alice",
                "bob",
                vec![term("us1", "python")],
                vec![term("us2", "design")],
            )
            .unwrap();
        assert!(created);
        assert_ne!(second.id, first.id);
    }

    #[test]
    fn test_upsert_is_direction_sensitive() {
        let (storage, _temp_dir) = setup();

        storage
            .upsert_active("alice", "bob", vec![term("us1", "python")], vec![term("us2", "design")])
            .unwrap();

        let (reverse, created) = storage
            .upsert_active("bob", "alice", vec![term("us2", "design")], vec![term("us1", "python")])
            .unwrap();
        assert!(created);
        assert_eq!(reverse.sender_id, "bob");
    }

    #[test]
    fn test_list_by_receiver_and_sender() {
        let (storage, _temp_dir) = setup();

        storage
            .upsert_active("alice", "bob", vec![term("us1", "python")], vec![term("us2", "design")])
            .unwrap();
        storage
            .upsert_active("carol", "bob", vec![term("us4", "rust")], vec![term("us5", "design")])
            .unwrap();

        assert_eq!(storage.list_by_receiver("bob").unwrap().len(), 2);
        assert_eq!(storage.list_by_sender("alice").unwrap().len(), 1);
        assert_eq!(storage.list_by_sender("bob").unwrap().len(), 0);
    }

    #[test]
    fn test_find_active_between() {
        let (storage, _temp_dir) = setup();

        assert!(storage.find_active_between("alice", "bob").unwrap().is_none());

        storage
            .upsert_active("alice", "bob", vec![term("us1", "python")], vec![term("us2", "design")])
            .unwrap();

        assert!(storage.find_active_between("alice", "bob").unwrap().is_some());
        assert!(storage.find_active_between("bob", "alice").unwrap().is_none());
    }
}
