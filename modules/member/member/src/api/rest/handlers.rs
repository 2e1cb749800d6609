use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::error::DomainError;
use crate::domain::service::Service;

use super::dto::{CreateMemberRequest, MemberDto, PatchMemberRequest};
use super::error::{
    domain_error_to_problem, malformed_body_problem, no_attributes_problem,
    patch_error_to_problem,
};
use super::openapi::build_openapi;
use super::problem::ApiResult;
use super::routes::MEMBERS_PATH;

/// `PATCH /api/member/{memberId}`
///
/// `202` once at least one attribute was applied; every failure is a `400`.
pub async fn patch_member(
    Extension(svc): Extension<Arc<Service>>,
    Path(member_id): Path<String>,
    payload: Result<Json<PatchMemberRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let instance = format!("{MEMBERS_PATH}/{member_id}");

    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable member patch body");
        malformed_body_problem(&instance)
    })?;

    // An empty body `memberId` is left for the service to reject.
    if !req.member_id.is_empty() && req.member_id != member_id {
        let e = DomainError::validation("memberId", "does not match the request path");
        return Err(patch_error_to_problem(&e, &instance));
    }

    match svc.patch_member(req.into()).await {
        Ok(0) => Err(no_attributes_problem(&instance)),
        Ok(_) => Ok(StatusCode::ACCEPTED),
        Err(e) => Err(patch_error_to_problem(&e, &instance)),
    }
}

/// `GET /api/member/{memberId}/{id}`
pub async fn get_member(
    Extension(svc): Extension<Arc<Service>>,
    Path((member_id, id)): Path<(String, String)>,
) -> ApiResult<Json<MemberDto>> {
    let member = svc
        .get_member(&id, &member_id)
        .await
        .map_err(|e| domain_error_to_problem(&e, &format!("{MEMBERS_PATH}/{member_id}/{id}")))?;
    Ok(Json(member.into()))
}

/// `POST /api/member`
pub async fn create_member(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateMemberRequest>,
) -> ApiResult<impl IntoResponse> {
    let member = svc
        .create_member(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, MEMBERS_PATH))?;
    let dto: MemberDto = member.into();
    Ok((StatusCode::CREATED, Json(dto)))
}

/// `GET /api/openapi.json`
pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(build_openapi())
}
