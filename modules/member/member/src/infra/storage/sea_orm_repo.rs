use std::fmt::Display;

use async_trait::async_trait;
use member_sdk::models::{Member, NewMember};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    QueryFilter, SqlErr, TransactionTrait, UpdateMany,
};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::domain::patch::PatchOperationSet;
use crate::domain::repo::{MemberRepository, RepoError};

use super::entity::{self, Entity as MemberEntity};
use super::mapper::{column_for, value_expr};
use super::migrations::Migrator;

/// Convert any displayable database error into an opaque storage error.
fn db_err(e: impl Display) -> RepoError {
    RepoError::Storage(anyhow::anyhow!("database error: {e}"))
}

/// Member store backed by a SQL database through sea-orm.
///
/// A patch is one `UPDATE` that sets only the patched columns and bumps
/// `version`, so concurrent patches to disjoint fields all land.
/// [`SeaOrmMemberRepository::update_fields_at_version`] is the guarded variant
/// for callers holding a version they read earlier.
pub struct SeaOrmMemberRepository {
    db: DatabaseConnection,
}

impl SeaOrmMemberRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connects to `dsn` and brings the schema up to date.
    ///
    /// # Errors
    /// Returns an error if the connection or a migration fails.
    pub async fn connect(dsn: &str) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(dsn.to_owned());
        options.sqlx_logging(false);
        // Every pooled connection to an in-memory SQLite database sees its own
        // empty database, so keep exactly one.
        if dsn.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }

        let db = Database::connect(options).await?;
        info!("Running member store migrations");
        Migrator::up(&db, None).await?;

        Ok(Self::new(db))
    }

    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Applies `ops` only if the record is still at `expected_version`.
    ///
    /// # Errors
    /// [`RepoError::Conflict`] if the record moved on or does not exist.
    pub async fn update_fields_at_version(
        &self,
        id: &str,
        member_id: &str,
        expected_version: u64,
        ops: &PatchOperationSet,
    ) -> Result<usize, RepoError> {
        let expected_version = i64::try_from(expected_version).map_err(db_err)?;
        let update = field_update(id, member_id, ops)
            .filter(entity::Column::Version.eq(expected_version));

        let result = update.exec(&self.db).await.map_err(db_err)?;
        if result.rows_affected == 0 {
            debug!(expected_version, "Member version changed before update");
            return Err(RepoError::Conflict);
        }
        Ok(ops.len())
    }
}

#[async_trait]
impl MemberRepository for SeaOrmMemberRepository {
    async fn find(&self, id: &str, member_id: &str) -> Result<Option<Member>, RepoError> {
        let result = MemberEntity::find_by_id((id.to_owned(), member_id.to_owned()))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        result.map(Member::try_from).transpose()
    }

    async fn insert(&self, member: NewMember) -> Result<Member, RepoError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = MemberEntity::find_by_id((member.id.clone(), member.member_id.clone()))
            .one(&txn)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(RepoError::AlreadyExists);
        }

        let active_model: entity::ActiveModel = member.into();
        let model = match active_model.insert(&txn).await {
            Ok(model) => model,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(RepoError::AlreadyExists);
            }
            Err(e) => return Err(db_err(e)),
        };

        txn.commit().await.map_err(db_err)?;
        Member::try_from(model)
    }

    async fn update_fields(
        &self,
        id: &str,
        member_id: &str,
        ops: &PatchOperationSet,
    ) -> Result<usize, RepoError> {
        // A single statement is atomic on its own.
        let result = field_update(id, member_id, ops)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(ops.len())
    }
}

/// `UPDATE members SET <ops>, version = version + 1 WHERE id = ? AND member_id = ?`
fn field_update(id: &str, member_id: &str, ops: &PatchOperationSet) -> UpdateMany<MemberEntity> {
    let mut update = MemberEntity::update_many()
        .col_expr(
            entity::Column::Version,
            Expr::col(entity::Column::Version).add(1),
        )
        .filter(entity::Column::Id.eq(id))
        .filter(entity::Column::MemberId.eq(member_id));
    for op in ops {
        update = update.col_expr(column_for(op.field()), value_expr(op.value()));
    }
    update
}
