use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub const MEMBERS_PATH: &str = "/api/member";
pub const MEMBER_PATH: &str = "/api/member/{memberId}";
pub const MEMBER_ITEM_PATH: &str = "/api/member/{memberId}/{id}";
pub const OPENAPI_PATH: &str = "/api/openapi.json";

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(MEMBERS_PATH, post(handlers::create_member))
        .route(MEMBER_PATH, patch(handlers::patch_member))
        .route(MEMBER_ITEM_PATH, get(handlers::get_member))
        .route(OPENAPI_PATH, get(handlers::openapi_document))
        .layer(Extension(service))
}
