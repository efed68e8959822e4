use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key to orders: metadata teardown is owned by the
        // deletion strategy, not the schema.
        manager
            .create_table(
                Table::create()
                    .table(OrderMeta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderMeta::MetaId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderMeta::OrderId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderMeta::MetaKey)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderMeta::MetaValue).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_order_meta_order_id")
                    .table(OrderMeta::Table)
                    .col(OrderMeta::OrderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderMeta::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrderMeta {
    Table,
    MetaId,
    OrderId,
    MetaKey,
    MetaValue,
}
