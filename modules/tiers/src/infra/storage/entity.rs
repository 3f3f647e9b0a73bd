//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Tiers table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tiers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub cart: Option<String>,

    /// Covered by the unique index `index_tiers_on_number`
    #[sea_orm(unique)]
    pub number: Option<i32>,

    pub name: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
