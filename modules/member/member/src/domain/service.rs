use std::sync::Arc;

use member_sdk::models::{Member, MemberPatch, NewMember};
use tracing::{debug, instrument, warn};

use super::error::DomainError;
use super::fields::MemberField;
use super::patch::{FieldValue, PatchOperationSet, PresencePolicy};
use super::repo::MemberRepository;

pub struct ServiceConfig {
    pub max_field_length: usize,
    pub treat_empty_as_unset: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_field_length: 256,
            treat_empty_as_unset: true,
        }
    }
}

pub struct Service {
    repo: Arc<dyn MemberRepository>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(repo: Arc<dyn MemberRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// Applies a sparse patch and returns the number of field operations applied.
    ///
    /// `Ok(0)` means no attribute was supplied; the store is not contacted.
    #[instrument(skip(self, patch), fields(id = %patch.id, member_id = %patch.member_id))]
    pub async fn patch_member(&self, patch: MemberPatch) -> Result<usize, DomainError> {
        validate_identity(&patch.id, &patch.member_id)?;

        let ops = PatchOperationSet::from_patch(&patch, self.presence_policy());
        self.validate_operations(&ops)?;

        if ops.is_empty() {
            debug!("No attributes provided; store not contacted");
            return Ok(0);
        }

        let requested = ops.len();
        let applied = self
            .repo
            .update_fields(&patch.id, &patch.member_id, &ops)
            .await
            .map_err(|e| DomainError::from_repo(e, &patch.id, &patch.member_id))?;

        if applied != requested {
            warn!(requested, applied, "Store applied a different number of operations");
            return Err(DomainError::Storage(anyhow::anyhow!(
                "store applied {applied} of {requested} operations"
            )));
        }

        debug!(applied, fields = ?ops.fields(), "Member patched");
        Ok(applied)
    }

    #[instrument(skip(self))]
    pub async fn get_member(&self, id: &str, member_id: &str) -> Result<Member, DomainError> {
        validate_identity(id, member_id)?;

        self.repo
            .find(id, member_id)
            .await
            .map_err(|e| DomainError::from_repo(e, id, member_id))?
            .ok_or_else(|| DomainError::NotFound {
                id: id.to_owned(),
                member_id: member_id.to_owned(),
            })
    }

    #[instrument(skip(self, member), fields(id = %member.id, member_id = %member.member_id))]
    pub async fn create_member(&self, member: NewMember) -> Result<Member, DomainError> {
        validate_identity(&member.id, &member.member_id)?;

        for (field, value) in [
            (MemberField::FirstName, &member.first_name),
            (MemberField::LastName, &member.last_name),
            (MemberField::Email, &member.email),
            (MemberField::Phone, &member.phone),
            (MemberField::Address, &member.address),
            (MemberField::Country, &member.country),
        ] {
            if let Some(value) = value {
                self.validate_field(field.as_str(), value)?;
            }
        }

        let id = member.id.clone();
        let member_id = member.member_id.clone();
        let created = self
            .repo
            .insert(member)
            .await
            .map_err(|e| DomainError::from_repo(e, &id, &member_id))?;

        debug!("Member created");
        Ok(created)
    }

    fn presence_policy(&self) -> PresencePolicy {
        PresencePolicy {
            treat_empty_as_unset: self.config.treat_empty_as_unset,
        }
    }

    fn validate_operations(&self, ops: &PatchOperationSet) -> Result<(), DomainError> {
        for op in ops {
            if let FieldValue::Text(text) = op.value() {
                self.validate_field(op.field().as_str(), text)?;
            }
        }
        Ok(())
    }

    fn validate_field(&self, field: &str, value: &str) -> Result<(), DomainError> {
        if value.chars().count() > self.config.max_field_length {
            return Err(DomainError::validation(
                field,
                format!("exceeds maximum length of {}", self.config.max_field_length),
            ));
        }
        Ok(())
    }
}

fn validate_identity(id: &str, member_id: &str) -> Result<(), DomainError> {
    if id.is_empty() || member_id.is_empty() {
        return Err(DomainError::MissingIdentity);
    }
    Ok(())
}
