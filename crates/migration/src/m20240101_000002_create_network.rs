//! Create `network` table.
//!
//! `ipv4` is nullable; the unique constraint only applies to non-null values.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Network::Table)
                    .if_not_exists()
                    .col(pk_auto(Network::Id))
                    .col(string_len_null(Network::Ipv4, 18).unique_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Network::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Network { Table, Id, Ipv4 }
