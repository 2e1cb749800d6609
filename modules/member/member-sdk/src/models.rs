//! Public models for the member module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the member module and its consumers.

use time::OffsetDateTime;

/// Stored member record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Stable internal identifier.
    pub id: String,
    /// External business identifier.
    pub member_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub member_since: Option<OffsetDateTime>,
    /// Optimistic concurrency counter, bumped by every successful update.
    pub version: u64,
}

/// Sparse partial update for a member (PATCH semantics).
///
/// `id` and `member_id` select the record and are never changed. Every other
/// field is `None` when the caller did not ask for it to change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberPatch {
    pub id: String,
    pub member_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub member_since: Option<OffsetDateTime>,
}

impl MemberPatch {
    /// Empty patch addressed at `(id, member_id)`.
    #[must_use]
    pub fn new(id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            member_id: member_id.into(),
            ..Self::default()
        }
    }
}

/// Data for creating a new member record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewMember {
    pub id: String,
    pub member_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub member_since: Option<OffsetDateTime>,
}
