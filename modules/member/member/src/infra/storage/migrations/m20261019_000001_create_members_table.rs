use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Members::Id).string().not_null())
                    .col(ColumnDef::new(Members::MemberId).string().not_null())
                    .col(ColumnDef::new(Members::FirstName).string().null())
                    .col(ColumnDef::new(Members::LastName).string().null())
                    .col(ColumnDef::new(Members::Email).string().null())
                    .col(ColumnDef::new(Members::Phone).string().null())
                    .col(ColumnDef::new(Members::Address).string().null())
                    .col(ColumnDef::new(Members::Country).string().null())
                    .col(
                        ColumnDef::new(Members::MemberSince)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Members::Version)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .primary_key(Index::create().col(Members::Id).col(Members::MemberId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
    MemberId,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Country,
    MemberSince,
    Version,
}
