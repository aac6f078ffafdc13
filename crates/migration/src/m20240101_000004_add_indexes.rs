use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ClientNetwork: at most one link per (client_id, network_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_client_network_pair")
                    .table(ClientNetwork::Table)
                    .col(ClientNetwork::ClientId)
                    .col(ClientNetwork::NetworkId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ClientNetwork: reverse lookups by network
        manager
            .create_index(
                Index::create()
                    .name("idx_client_network_network")
                    .table(ClientNetwork::Table)
                    .col(ClientNetwork::NetworkId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_client_network_network").table(ClientNetwork::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_client_network_pair").table(ClientNetwork::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClientNetwork { Table, ClientId, NetworkId }
