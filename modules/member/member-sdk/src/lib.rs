//! Member SDK
//!
//! This crate provides the public API for the member module:
//! - `MemberApi` trait for in-process consumers
//! - Model types (`Member`, `MemberPatch`, `NewMember`)
//! - Error type (`MemberError`)
//!
//! ```ignore
//! let applied = client.patch_member(patch).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::MemberApi;
pub use errors::MemberError;
pub use models::{Member, MemberPatch, NewMember};
