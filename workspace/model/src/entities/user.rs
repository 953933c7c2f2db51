use sea_orm::entity::prelude::*;

/// A registered store customer.
///
/// `email` is unique at the store level; nothing above the database checks
/// it, so a duplicate insert surfaces as a constraint error from the driver.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Stored as received. The upstream service never hashed passwords and
    /// hashing is out of scope here as well.
    pub password: String,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
    #[sea_orm(default_value = "0")]
    pub wallet_balance: i32,
    pub profile_picture: Option<String>,
    /// Stamped once at insert time, never updated.
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
