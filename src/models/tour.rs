use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub type_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub base_price: f64,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour_type::Entity",
        from = "Column::TypeId",
        to = "super::tour_type::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TourType,
    #[sea_orm(has_many = "super::tour_hotel::Entity")]
    TourHotels,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::tour_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourType.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        super::tour_hotel::Relation::Hotel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tour_hotel::Relation::Tour.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourDto {
    pub type_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub base_price: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
