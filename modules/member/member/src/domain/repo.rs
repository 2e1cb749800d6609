use async_trait::async_trait;
use member_sdk::models::{Member, NewMember};

use super::patch::PatchOperationSet;

/// Failures a member store reports to the domain layer.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,

    #[error("record already exists")]
    AlreadyExists,

    #[error("record version changed between read and write")]
    Conflict,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Keyed member store.
///
/// Records are addressed by the `(id, member_id)` pair.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find(&self, id: &str, member_id: &str) -> Result<Option<Member>, RepoError>;

    async fn insert(&self, member: NewMember) -> Result<Member, RepoError>;

    /// Applies `ops` to the record as one atomic unit and returns the number
    /// of operations applied, which must equal `ops.len()` on success.
    async fn update_fields(
        &self,
        id: &str,
        member_id: &str,
        ops: &PatchOperationSet,
    ) -> Result<usize, RepoError>;
}
