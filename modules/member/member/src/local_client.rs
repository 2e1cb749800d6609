use async_trait::async_trait;
use member_sdk::{Member, MemberApi, MemberError, MemberPatch, NewMember};
use std::sync::Arc;

use crate::domain::service::Service;

/// In-process [`MemberApi`] backed directly by the domain service.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MemberApi for LocalClient {
    async fn patch_member(&self, patch: MemberPatch) -> Result<usize, MemberError> {
        self.service.patch_member(patch).await.map_err(Into::into)
    }

    async fn get_member(&self, id: &str, member_id: &str) -> Result<Member, MemberError> {
        self.service
            .get_member(id, member_id)
            .await
            .map_err(Into::into)
    }

    async fn create_member(&self, member: NewMember) -> Result<Member, MemberError> {
        self.service.create_member(member).await.map_err(Into::into)
    }
}
