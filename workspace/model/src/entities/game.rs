use sea_orm::entity::prelude::*;

/// A game in the store catalog.
///
/// `release_date` is kept as free-form text, matching the upstream schema —
/// it was never a structured date there either.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub developer: String,
    pub publisher: String,
    pub genre: String,
    pub price: i32,
    pub release_date: String,
    #[sea_orm(default_value = "0")]
    pub rating: i32,
    pub cover_image: Option<String>,
}

// Games are catalog entries only; they reference no other table.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
