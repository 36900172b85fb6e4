use sea_orm::entity::prelude::*;

/// A training session held at this facility.
///
/// Sessions are created locally when staff log training, or imported from the
/// VATUSA training record API during a sync pass. `vatusa_id` is the
/// cross-reference to the authoritative VATUSA record; it stays `NULL` until
/// the session has been reconciled and is unique across all rows once set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "training_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_cid: i32,
    pub instructor_cid: i32,
    pub position: String,
    pub location: i32,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    /// Stored duration display, always `HH:MM`.
    pub duration: String,
    pub movements: Option<i32>,
    pub score: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub milestone: String,
    #[sea_orm(unique)]
    pub vatusa_id: Option<i64>,
    pub submitted: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
