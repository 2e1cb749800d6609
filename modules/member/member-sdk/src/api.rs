//! `MemberApi` trait definition.
//!
//! This trait defines the public API for the member module.

use async_trait::async_trait;

use crate::errors::MemberError;
use crate::models::{Member, MemberPatch, NewMember};

/// Public API trait for the member module.
#[async_trait]
pub trait MemberApi: Send + Sync {
    /// Partially update a member (PATCH semantics).
    ///
    /// Returns the number of field operations applied. `Ok(0)` means the
    /// patch carried no attributes and the store was not contacted.
    async fn patch_member(&self, patch: MemberPatch) -> Result<usize, MemberError>;

    /// Fetch a member by its `(id, member_id)` pair.
    async fn get_member(&self, id: &str, member_id: &str) -> Result<Member, MemberError>;

    /// Create a new member record.
    async fn create_member(&self, member: NewMember) -> Result<Member, MemberError>;
}
