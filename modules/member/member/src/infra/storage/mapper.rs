use member_sdk::models::{Member, NewMember};
use sea_orm::ActiveValue;
use sea_orm::sea_query::{Expr, SimpleExpr};

use crate::domain::fields::MemberField;
use crate::domain::patch::FieldValue;
use crate::domain::repo::RepoError;

use super::entity;

impl TryFrom<entity::Model> for Member {
    type Error = RepoError;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let version = u64::try_from(entity.version).map_err(|_| {
            RepoError::Storage(anyhow::anyhow!(
                "member ({}, {}) has invalid version {}",
                entity.id,
                entity.member_id,
                entity.version
            ))
        })?;

        Ok(Self {
            id: entity.id,
            member_id: entity.member_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            country: entity.country,
            member_since: entity.member_since,
            version,
        })
    }
}

impl From<NewMember> for entity::ActiveModel {
    fn from(member: NewMember) -> Self {
        Self {
            id: ActiveValue::Set(member.id),
            member_id: ActiveValue::Set(member.member_id),
            first_name: ActiveValue::Set(member.first_name),
            last_name: ActiveValue::Set(member.last_name),
            email: ActiveValue::Set(member.email),
            phone: ActiveValue::Set(member.phone),
            address: ActiveValue::Set(member.address),
            country: ActiveValue::Set(member.country),
            member_since: ActiveValue::Set(member.member_since),
            version: ActiveValue::Set(1),
        }
    }
}

pub fn column_for(field: MemberField) -> entity::Column {
    match field {
        MemberField::FirstName => entity::Column::FirstName,
        MemberField::LastName => entity::Column::LastName,
        MemberField::Email => entity::Column::Email,
        MemberField::Phone => entity::Column::Phone,
        MemberField::Address => entity::Column::Address,
        MemberField::Country => entity::Column::Country,
        MemberField::MemberSince => entity::Column::MemberSince,
    }
}

pub fn value_expr(value: &FieldValue) -> SimpleExpr {
    match value {
        FieldValue::Text(text) => Expr::value(text.clone()),
        FieldValue::Timestamp(ts) => Expr::value(*ts),
    }
}
