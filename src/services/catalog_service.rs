//! Catalog Service - countries, cities, hotels, tour types and tours
//!
//! Deletions are uniformly blocked while dependent records exist; callers
//! must remove dependents first.

use sea_orm::*;
use serde::{Deserialize, Serialize};

use crate::domain::ServiceError;
use crate::models::booking::{self, Entity as Booking};
use crate::models::city::{self, Entity as City};
use crate::models::country::{self, Entity as Country};
use crate::models::hotel::{self, Entity as Hotel};
use crate::models::tour::{self, Entity as Tour, TourDto};
use crate::models::tour_hotel::{self, Entity as TourHotel};
use crate::models::tour_type::{self, Entity as TourType};
use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDto {
    pub name: String,
    #[serde(default)]
    pub visa_required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityDto {
    pub country_id: i32,
    pub name: String,
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelDto {
    pub city_id: i32,
    pub name: String,
    pub stars: i32,
    #[serde(default)]
    pub beach_line: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourTypeDto {
    pub name: String,
    pub description: Option<String>,
}

/// One hotel stay within a tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourHotelDto {
    pub hotel_id: i32,
    pub nights: i32,
}

// --- Countries ---

pub async fn list_countries(db: &DatabaseConnection) -> Result<Vec<country::Model>, ServiceError> {
    let countries = Country::find()
        .order_by_asc(country::Column::Name)
        .all(db)
        .await?;
    Ok(countries)
}

pub async fn create_country(
    db: &DatabaseConnection,
    dto: CountryDto,
) -> Result<country::Model, ServiceError> {
    if dto.name.trim().is_empty() {
        return Err(ServiceError::Validation("country name is required".into()));
    }

    let new_country = country::ActiveModel {
        name: Set(dto.name),
        visa_required: Set(dto.visa_required),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    let saved = new_country.insert(db).await?;
    Ok(saved)
}

pub async fn delete_country(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let country = Country::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let cities = City::find()
        .filter(city::Column::CountryId.eq(id))
        .count(&txn)
        .await?;
    if cities > 0 {
        return Err(ServiceError::HasDependents(
            "country still has cities".into(),
        ));
    }

    country.delete(&txn).await?;
    txn.commit().await?;
    Ok(())
}

// --- Cities ---

pub async fn list_cities(
    db: &DatabaseConnection,
    country_id: Option<i32>,
) -> Result<Vec<city::Model>, ServiceError> {
    let mut query = City::find();
    if let Some(country_id) = country_id {
        query = query.filter(city::Column::CountryId.eq(country_id));
    }
    let cities = query.order_by_asc(city::Column::Name).all(db).await?;
    Ok(cities)
}

pub async fn create_city(
    db: &DatabaseConnection,
    dto: CityDto,
) -> Result<city::Model, ServiceError> {
    if dto.name.trim().is_empty() {
        return Err(ServiceError::Validation("city name is required".into()));
    }

    let txn = db.begin().await?;

    Country::find_by_id(dto.country_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    if City::find()
        .filter(city::Column::CountryId.eq(dto.country_id))
        .filter(city::Column::Name.eq(&dto.name))
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(ServiceError::DuplicateKey(
            "this country already has a city with that name".into(),
        ));
    }

    let new_city = city::ActiveModel {
        country_id: Set(dto.country_id),
        name: Set(dto.name),
        is_popular: Set(dto.is_popular),
        ..Default::default()
    };
    let saved = new_city.insert(&txn).await?;
    txn.commit().await?;
    Ok(saved)
}

pub async fn delete_city(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let city = City::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let hotels = Hotel::find()
        .filter(hotel::Column::CityId.eq(id))
        .count(&txn)
        .await?;
    if hotels > 0 {
        return Err(ServiceError::HasDependents("city still has hotels".into()));
    }

    city.delete(&txn).await?;
    txn.commit().await?;
    Ok(())
}

pub async fn toggle_city_popular(
    db: &DatabaseConnection,
    id: i32,
) -> Result<city::Model, ServiceError> {
    let city = City::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let is_popular = city.is_popular;
    let mut active: city::ActiveModel = city.into();
    active.is_popular = Set(!is_popular);
    let updated = active.update(db).await?;
    Ok(updated)
}

// --- Hotels ---

pub async fn list_hotels(
    db: &DatabaseConnection,
    city_id: Option<i32>,
) -> Result<Vec<hotel::Model>, ServiceError> {
    let mut query = Hotel::find();
    if let Some(city_id) = city_id {
        query = query.filter(hotel::Column::CityId.eq(city_id));
    }
    let hotels = query.order_by_asc(hotel::Column::Name).all(db).await?;
    Ok(hotels)
}

pub async fn create_hotel(
    db: &DatabaseConnection,
    dto: HotelDto,
) -> Result<hotel::Model, ServiceError> {
    validation::validate_hotel(&dto.name, dto.stars)?;

    let txn = db.begin().await?;

    City::find_by_id(dto.city_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let new_hotel = hotel::ActiveModel {
        city_id: Set(dto.city_id),
        name: Set(dto.name),
        stars: Set(dto.stars),
        beach_line: Set(dto.beach_line),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    let saved = new_hotel.insert(&txn).await?;
    txn.commit().await?;
    Ok(saved)
}

pub async fn delete_hotel(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let hotel = Hotel::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let stays = TourHotel::find()
        .filter(tour_hotel::Column::HotelId.eq(id))
        .count(&txn)
        .await?;
    if stays > 0 {
        return Err(ServiceError::HasDependents(
            "hotel is referenced by tours".into(),
        ));
    }

    hotel.delete(&txn).await?;
    txn.commit().await?;
    Ok(())
}

pub async fn toggle_hotel_beach_line(
    db: &DatabaseConnection,
    id: i32,
) -> Result<hotel::Model, ServiceError> {
    let hotel = Hotel::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let beach_line = hotel.beach_line;
    let mut active: hotel::ActiveModel = hotel.into();
    active.beach_line = Set(!beach_line);
    let updated = active.update(db).await?;
    tracing::info!("hotel {} beach_line set to {}", id, !beach_line);
    Ok(updated)
}

// --- Tour types ---

pub async fn list_tour_types(
    db: &DatabaseConnection,
) -> Result<Vec<tour_type::Model>, ServiceError> {
    let types = TourType::find()
        .order_by_asc(tour_type::Column::Name)
        .all(db)
        .await?;
    Ok(types)
}

pub async fn create_tour_type(
    db: &DatabaseConnection,
    dto: TourTypeDto,
) -> Result<tour_type::Model, ServiceError> {
    if dto.name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "tour type name is required".into(),
        ));
    }

    let txn = db.begin().await?;

    if TourType::find()
        .filter(tour_type::Column::Name.eq(&dto.name))
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(ServiceError::DuplicateKey(
            "a tour type with this name already exists".into(),
        ));
    }

    let new_type = tour_type::ActiveModel {
        name: Set(dto.name),
        description: Set(dto.description),
        ..Default::default()
    };
    let saved = new_type.insert(&txn).await?;
    txn.commit().await?;
    Ok(saved)
}

pub async fn delete_tour_type(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let tour_type = TourType::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let tours = Tour::find()
        .filter(tour::Column::TypeId.eq(id))
        .count(&txn)
        .await?;
    if tours > 0 {
        return Err(ServiceError::HasDependents(
            "tour type still has tours".into(),
        ));
    }

    tour_type.delete(&txn).await?;
    txn.commit().await?;
    Ok(())
}

// --- Tours ---

pub async fn list_tours(
    db: &DatabaseConnection,
    active_only: bool,
) -> Result<Vec<tour::Model>, ServiceError> {
    let mut query = Tour::find();
    if active_only {
        query = query.filter(tour::Column::IsActive.eq(true));
    }
    let tours = query.order_by_asc(tour::Column::Id).all(db).await?;
    Ok(tours)
}

pub async fn get_tour(db: &DatabaseConnection, id: i32) -> Result<tour::Model, ServiceError> {
    Tour::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)
}

pub async fn create_tour(
    db: &DatabaseConnection,
    dto: TourDto,
) -> Result<tour::Model, ServiceError> {
    validation::validate_tour(&dto.title, dto.description.as_deref(), dto.base_price)?;

    let txn = db.begin().await?;

    TourType::find_by_id(dto.type_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let new_tour = tour::ActiveModel {
        type_id: Set(dto.type_id),
        title: Set(dto.title),
        description: Set(dto.description),
        base_price: Set(dto.base_price),
        is_active: Set(dto.is_active),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    let saved = new_tour.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!("created tour {} '{}'", saved.id, saved.title);
    Ok(saved)
}

pub async fn delete_tour(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let tour = Tour::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let bookings = Booking::find()
        .filter(booking::Column::TourId.eq(id))
        .count(&txn)
        .await?;
    if bookings > 0 {
        return Err(ServiceError::HasDependents(
            "tour has existing bookings".into(),
        ));
    }

    TourHotel::delete_many()
        .filter(tour_hotel::Column::TourId.eq(id))
        .exec(&txn)
        .await?;
    tour.delete(&txn).await?;
    txn.commit().await?;

    tracing::info!("deleted tour {}", id);
    Ok(())
}

pub async fn toggle_tour_active(
    db: &DatabaseConnection,
    id: i32,
) -> Result<tour::Model, ServiceError> {
    let tour = Tour::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let is_active = tour.is_active;
    let mut active: tour::ActiveModel = tour.into();
    active.is_active = Set(!is_active);
    let updated = active.update(db).await?;
    Ok(updated)
}

/// Replace the set of hotel stays attached to a tour
pub async fn set_tour_hotels(
    db: &DatabaseConnection,
    tour_id: i32,
    stays: Vec<TourHotelDto>,
) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    Tour::find_by_id(tour_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    for stay in &stays {
        if stay.nights <= 0 {
            return Err(ServiceError::Validation(
                "nights must be greater than 0".into(),
            ));
        }
        Hotel::find_by_id(stay.hotel_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound)?;
    }

    TourHotel::delete_many()
        .filter(tour_hotel::Column::TourId.eq(tour_id))
        .exec(&txn)
        .await?;

    for stay in stays {
        let row = tour_hotel::ActiveModel {
            tour_id: Set(tour_id),
            hotel_id: Set(stay.hotel_id),
            nights: Set(stay.nights),
        };
        row.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(())
}

/// List the hotel stays attached to a tour
pub async fn list_tour_hotels(
    db: &DatabaseConnection,
    tour_id: i32,
) -> Result<Vec<tour_hotel::Model>, ServiceError> {
    Tour::find_by_id(tour_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let stays = TourHotel::find()
        .filter(tour_hotel::Column::TourId.eq(tour_id))
        .order_by_asc(tour_hotel::Column::HotelId)
        .all(db)
        .await?;
    Ok(stays)
}
