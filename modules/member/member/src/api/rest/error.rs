use axum::http::StatusCode;

use crate::domain::error::DomainError;

use super::problem::Problem;

/// Detail returned when `id` or `memberId` is missing.
pub const IDENTITY_REQUIRED_DETAIL: &str = "id and memberId required!";
/// Detail returned when a patch carries no attributes.
pub const NO_ATTRIBUTES_DETAIL: &str = "No attributes provided.";
/// Detail returned for every other rejected patch.
pub const PATCH_REJECTED_DETAIL: &str = "The member update could not be applied.";

pub mod codes {
    pub const IDENTITY_REQUIRED: &str = "MEMBER_IDENTITY_REQUIRED";
    pub const NO_ATTRIBUTES: &str = "MEMBER_NO_ATTRIBUTES";
    pub const VALIDATION: &str = "MEMBER_VALIDATION";
    pub const PATCH_REJECTED: &str = "MEMBER_PATCH_REJECTED";
    pub const NOT_FOUND: &str = "MEMBER_NOT_FOUND";
    pub const ALREADY_EXISTS: &str = "MEMBER_ALREADY_EXISTS";
    pub const CONFLICT: &str = "MEMBER_CONFLICT";
    pub const INTERNAL: &str = "MEMBER_INTERNAL";
}

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

fn with_context(problem: Problem, instance: &str) -> Problem {
    let problem = problem.with_instance(instance);
    match current_trace_id() {
        Some(trace_id) => problem.with_trace_id(trace_id),
        None => problem,
    }
}

fn bad_request(code: &str, detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail).with_code(code)
}

/// Problem for a patch that named no attributes.
pub fn no_attributes_problem(instance: &str) -> Problem {
    with_context(
        bad_request(codes::NO_ATTRIBUTES, NO_ATTRIBUTES_DETAIL),
        instance,
    )
}

/// Problem for a request whose body could not be read as a member.
pub fn malformed_body_problem(instance: &str) -> Problem {
    with_context(
        bad_request(codes::PATCH_REJECTED, PATCH_REJECTED_DETAIL),
        instance,
    )
}

/// Map a failed patch to its response.
///
/// PATCH failures all surface as 400. Only a missing identity keeps its
/// message; everything else is logged and collapsed into one generic
/// rejection.
pub fn patch_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::MissingIdentity => {
            bad_request(codes::IDENTITY_REQUIRED, IDENTITY_REQUIRED_DETAIL)
        }
        DomainError::Validation { .. }
        | DomainError::NotFound { .. }
        | DomainError::AlreadyExists { .. }
        | DomainError::Conflict { .. } => {
            tracing::warn!(error = %e, "Member patch rejected");
            bad_request(codes::PATCH_REJECTED, PATCH_REJECTED_DETAIL)
        }
        DomainError::Storage(_) => {
            tracing::error!(error = ?e, "Member patch failed in storage");
            bad_request(codes::PATCH_REJECTED, PATCH_REJECTED_DETAIL)
        }
    };
    with_context(problem, instance)
}

/// Map domain error to RFC 9457 Problem for reads and creates.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::MissingIdentity => {
            bad_request(codes::IDENTITY_REQUIRED, IDENTITY_REQUIRED_DETAIL)
        }
        DomainError::Validation { field, message } => bad_request(
            codes::VALIDATION,
            format!("Validation error on '{field}': {message}"),
        ),
        DomainError::NotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found", "Member not found")
                .with_code(codes::NOT_FOUND)
        }
        DomainError::AlreadyExists { .. } => {
            Problem::new(StatusCode::CONFLICT, "Conflict", "Member already exists")
                .with_code(codes::ALREADY_EXISTS)
        }
        DomainError::Conflict { .. } => Problem::new(
            StatusCode::CONFLICT,
            "Conflict",
            "Member was modified concurrently",
        )
        .with_code(codes::CONFLICT),
        DomainError::Storage(_) => {
            tracing::error!(error = ?e, "Member storage error");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal error occurred",
            )
            .with_code(codes::INTERNAL)
        }
    };
    with_context(problem, instance)
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
