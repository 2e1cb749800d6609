use member_sdk::errors::MemberError;

use super::repo::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("id and memberId required")]
    MissingIdentity,

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Member not found: id={id}, memberId={member_id}")]
    NotFound { id: String, member_id: String },

    #[error("Member already exists: id={id}, memberId={member_id}")]
    AlreadyExists { id: String, member_id: String },

    #[error("Member was modified concurrently: id={id}, memberId={member_id}")]
    Conflict { id: String, member_id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Attaches the addressed record to a storage-level error.
    pub fn from_repo(e: RepoError, id: &str, member_id: &str) -> Self {
        let id = id.to_owned();
        let member_id = member_id.to_owned();
        match e {
            RepoError::NotFound => Self::NotFound { id, member_id },
            RepoError::AlreadyExists => Self::AlreadyExists { id, member_id },
            RepoError::Conflict => Self::Conflict { id, member_id },
            RepoError::Storage(source) => Self::Storage(source),
        }
    }
}

impl From<DomainError> for MemberError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MissingIdentity => Self::validation("id and memberId required"),
            DomainError::Validation { field, message } => {
                Self::validation(format!("{field}: {message}"))
            }
            DomainError::NotFound { .. } => Self::not_found(),
            DomainError::AlreadyExists { .. } => Self::already_exists(),
            DomainError::Conflict { .. } => Self::conflict(),
            DomainError::Storage(_) => Self::internal(),
        }
    }
}
