use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub name_latin: Option<String>,
    pub passport_number: String,
    pub passport_expiry: String,
    pub birth_date: String,
    pub gender: String,
    pub phone: String,
    pub email: Option<String>,
    pub registration_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Incoming client data, shared by the create and update paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDto {
    pub first_name: String,
    pub last_name: String,
    pub name_latin: Option<String>,
    pub passport_number: String,
    pub passport_expiry: String,
    pub birth_date: String,
    pub gender: String,
    pub phone: String,
    pub email: Option<String>,
}
