//! Member Module Implementation
//!
//! Sparse partial updates of member records. The public API is defined in
//! `member-sdk` and re-exported here.

pub use member_sdk::{Member, MemberApi, MemberError, MemberPatch, NewMember};

pub mod module;
pub use module::MemberModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

pub use config::MemberConfig;
