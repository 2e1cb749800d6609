//! In-memory member store.

use std::collections::HashMap;

use async_trait::async_trait;
use member_sdk::models::{Member, NewMember};
use parking_lot::Mutex;

use crate::domain::patch::PatchOperationSet;
use crate::domain::repo::{MemberRepository, RepoError};

type MemberKey = (String, String);

/// Member store held in process memory.
///
/// Every update runs under a single lock acquisition, so a patch is applied
/// completely or not at all and concurrent patches serialize per call.
#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Mutex<HashMap<MemberKey, Member>>,
}

impl InMemoryMemberRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(id: &str, member_id: &str) -> MemberKey {
        (id.to_owned(), member_id.to_owned())
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find(&self, id: &str, member_id: &str) -> Result<Option<Member>, RepoError> {
        Ok(self.members.lock().get(&Self::key(id, member_id)).cloned())
    }

    async fn insert(&self, member: NewMember) -> Result<Member, RepoError> {
        let key = Self::key(&member.id, &member.member_id);
        let mut members = self.members.lock();
        if members.contains_key(&key) {
            return Err(RepoError::AlreadyExists);
        }

        let stored = Member {
            id: member.id,
            member_id: member.member_id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            phone: member.phone,
            address: member.address,
            country: member.country,
            member_since: member.member_since,
            version: 1,
        };
        members.insert(key, stored.clone());
        Ok(stored)
    }

    async fn update_fields(
        &self,
        id: &str,
        member_id: &str,
        ops: &PatchOperationSet,
    ) -> Result<usize, RepoError> {
        let mut members = self.members.lock();
        let member = members
            .get_mut(&Self::key(id, member_id))
            .ok_or(RepoError::NotFound)?;

        ops.apply_to(member);
        member.version += 1;
        Ok(ops.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patch::PresencePolicy;
    use member_sdk::models::MemberPatch;
    use std::sync::Arc;

    fn new_member(id: &str, member_id: &str) -> NewMember {
        NewMember {
            id: id.to_owned(),
            member_id: member_id.to_owned(),
            first_name: Some("Ada".to_owned()),
            ..NewMember::default()
        }
    }

    fn ops(patch: &MemberPatch) -> PatchOperationSet {
        PatchOperationSet::from_patch(patch, PresencePolicy::default())
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(new_member("1", "M1")).await.unwrap();

        let found = repo.find("1", "M1").await.unwrap().unwrap();
        assert_eq!(found.first_name.as_deref(), Some("Ada"));
        assert_eq!(found.version, 1);
        assert!(repo.find("1", "M2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_fails() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(new_member("1", "M1")).await.unwrap();

        let err = repo.insert(new_member("1", "M1")).await.unwrap_err();
        assert!(matches!(err, RepoError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_update_unknown_record_is_not_found() {
        let repo = InMemoryMemberRepository::new();
        let patch = MemberPatch {
            email: Some("a@b.com".to_owned()),
            ..MemberPatch::new("1", "M1")
        };

        let err = repo.update_fields("1", "M1", &ops(&patch)).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_update_applies_fields_and_bumps_version() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(new_member("1", "M1")).await.unwrap();
        let patch = MemberPatch {
            email: Some("a@b.com".to_owned()),
            country: Some("NZ".to_owned()),
            ..MemberPatch::new("1", "M1")
        };

        let applied = repo.update_fields("1", "M1", &ops(&patch)).await.unwrap();

        assert_eq!(applied, 2);
        let found = repo.find("1", "M1").await.unwrap().unwrap();
        assert_eq!(found.email.as_deref(), Some("a@b.com"));
        assert_eq!(found.country.as_deref(), Some("NZ"));
        assert_eq!(found.first_name.as_deref(), Some("Ada"));
        assert_eq!(found.version, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_disjoint_patches_both_land() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        repo.insert(new_member("1", "M1")).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let patch = if i % 2 == 0 {
                    MemberPatch {
                        email: Some(format!("user{i}@example.com")),
                        ..MemberPatch::new("1", "M1")
                    }
                } else {
                    MemberPatch {
                        phone: Some(format!("+1-555-{i:04}")),
                        ..MemberPatch::new("1", "M1")
                    }
                };
                repo.update_fields("1", "M1", &ops(&patch)).await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), 1);
        }

        let found = repo.find("1", "M1").await.unwrap().unwrap();
        assert!(found.email.is_some());
        assert!(found.phone.is_some());
        assert_eq!(found.first_name.as_deref(), Some("Ada"));
        assert_eq!(found.version, 17);
    }
}
