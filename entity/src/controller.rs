use sea_orm::entity::prelude::*;

/// A controller on the facility roster.
///
/// The primary key is the network certificate id (CID), assigned by the
/// parent organization. Operating initials are unique within the facility.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "controller")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cid: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub operating_initials: String,
    pub joined_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
