use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Client: name and surname lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_client_name")
                    .table(Client::Table)
                    .col(Client::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_client_surname")
                    .table(Client::Table)
                    .col(Client::Surname)
                    .to_owned(),
            )
            .await?;

        // Order: orders of a client
        manager
            .create_index(
                Index::create()
                    .name("idx_order_client")
                    .table(Order::Table)
                    .col(Order::ClientId)
                    .to_owned(),
            )
            .await?;

        // OrderItem: items of an order
        manager
            .create_index(
                Index::create()
                    .name("idx_order_item_order")
                    .table(OrderItem::Table)
                    .col(OrderItem::OrderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_client_name").table(Client::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_client_surname").table(Client::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_client").table(Order::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_item_order").table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Client { Table, Name, Surname }

#[derive(DeriveIden)]
enum Order {
    #[sea_orm(iden = "db_order")]
    Table,
    ClientId,
}

#[derive(DeriveIden)]
enum OrderItem { Table, OrderId }
