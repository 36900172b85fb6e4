use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Controller::Table)
                    .if_not_exists()
                    .col(integer(Controller::Cid).primary_key())
                    .col(string(Controller::FirstName))
                    .col(string(Controller::LastName))
                    .col(string(Controller::OperatingInitials))
                    .col(
                        timestamp(Controller::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_controller_operating_initials")
                    .table(Controller::Table)
                    .col(Controller::OperatingInitials)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Controller::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Controller {
    Table,
    Cid,
    FirstName,
    LastName,
    OperatingInitials,
    JoinedAt,
}
