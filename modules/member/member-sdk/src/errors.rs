//! Error types for the member SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Member not found")]
    NotFound,

    #[error("Member already exists")]
    AlreadyExists,

    #[error("Member was modified concurrently")]
    Conflict,

    #[error("Internal error")]
    Internal,
}

impl MemberError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound
    }

    #[must_use]
    pub fn already_exists() -> Self {
        Self::AlreadyExists
    }

    #[must_use]
    pub fn conflict() -> Self {
        Self::Conflict
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
