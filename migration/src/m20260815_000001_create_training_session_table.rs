use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingSession::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingSession::Id))
                    .col(integer(TrainingSession::StudentCid))
                    .col(integer(TrainingSession::InstructorCid))
                    .col(string(TrainingSession::Position))
                    .col(integer(TrainingSession::Location))
                    .col(timestamp(TrainingSession::StartTime))
                    .col(timestamp(TrainingSession::EndTime))
                    .col(string(TrainingSession::Duration))
                    .col(integer_null(TrainingSession::Movements))
                    .col(integer_null(TrainingSession::Score))
                    .col(text_null(TrainingSession::Notes))
                    .col(string(TrainingSession::Milestone))
                    .col(big_integer_null(TrainingSession::VatusaId))
                    .col(boolean(TrainingSession::Submitted).default(false))
                    .col(
                        timestamp(TrainingSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One local session per VATUSA record; unreconciled rows keep NULL.
        manager
            .create_index(
                Index::create()
                    .name("idx_training_session_vatusa_id")
                    .table(TrainingSession::Table)
                    .col(TrainingSession::VatusaId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingSession {
    Table,
    Id,
    StudentCid,
    InstructorCid,
    Position,
    Location,
    StartTime,
    EndTime,
    Duration,
    Movements,
    Score,
    Notes,
    Milestone,
    VatusaId,
    Submitted,
    CreatedAt,
}
