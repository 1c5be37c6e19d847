use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_foods_table::Migration)]
    }
}

mod m20240101_000001_create_foods_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_foods_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Aligned with entities::food Model
            manager
                .create_table(
                    Table::create()
                        .table(Foods::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Foods::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Foods::Name).string().not_null())
                        .col(ColumnDef::new(Foods::Brand).string().not_null())
                        .col(ColumnDef::new(Foods::Max).integer().not_null())
                        .col(ColumnDef::new(Foods::Quantity).integer().not_null())
                        .col(ColumnDef::new(Foods::Type).string_len(32).not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_foods_name")
                        .table(Foods::Table)
                        .col(Foods::Name)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Foods::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Foods {
        Table,
        Id,
        Name,
        Brand,
        Max,
        Quantity,
        Type,
    }
}
