//! Database migrations for the tiers module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20150507_230440_create_tiers::Migration)]
    }
}

mod m20150507_230440_create_tiers {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Tiers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Tiers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Tiers::Cart).string().null())
                        .col(ColumnDef::new(Tiers::Number).integer().null())
                        .col(ColumnDef::new(Tiers::Name).string().null())
                        .col(ColumnDef::new(Tiers::Notes).text().null())
                        .col(
                            ColumnDef::new(Tiers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Tiers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("index_tiers_on_number")
                        .table(Tiers::Table)
                        .col(Tiers::Number)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Tiers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Tiers {
        Table,
        Id,
        Cart,
        Number,
        Name,
        Notes,
        CreatedAt,
        UpdatedAt,
    }
}
