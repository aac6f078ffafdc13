use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientNetwork::Table)
                    .if_not_exists()
                    .col(pk_auto(ClientNetwork::Id))
                    .col(uuid(ClientNetwork::ClientId).not_null())
                    .col(integer(ClientNetwork::NetworkId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_network_client")
                            .from(ClientNetwork::Table, ClientNetwork::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_network_network")
                            .from(ClientNetwork::Table, ClientNetwork::NetworkId)
                            .to(Network::Table, Network::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ClientNetwork::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ClientNetwork { Table, Id, ClientId, NetworkId }

#[derive(DeriveIden)]
enum Client { Table, Id }

#[derive(DeriveIden)]
enum Network { Table, Id }
