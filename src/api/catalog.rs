use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::models::tour::TourDto;
use crate::services::catalog_service::{
    self, CityDto, CountryDto, HotelDto, TourHotelDto, TourTypeDto,
};

use super::error_response;

// --- Countries ---

pub async fn list_countries(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match catalog_service::list_countries(&db).await {
        Ok(countries) => (StatusCode::OK, Json(countries)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_country(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CountryDto>,
) -> impl IntoResponse {
    match catalog_service::create_country(&db, payload).await {
        Ok(country) => (StatusCode::CREATED, Json(country)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_country(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::delete_country(&db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Country deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}

// --- Cities ---

#[derive(Deserialize)]
pub struct CityQuery {
    pub country_id: Option<i32>,
}

pub async fn list_cities(
    State(db): State<DatabaseConnection>,
    Query(params): Query<CityQuery>,
) -> impl IntoResponse {
    match catalog_service::list_cities(&db, params.country_id).await {
        Ok(cities) => (StatusCode::OK, Json(cities)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_city(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CityDto>,
) -> impl IntoResponse {
    match catalog_service::create_city(&db, payload).await {
        Ok(city) => (StatusCode::CREATED, Json(city)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_city(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::delete_city(&db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "City deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn toggle_city_popular(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::toggle_city_popular(&db, id).await {
        Ok(city) => (StatusCode::OK, Json(city)).into_response(),
        Err(e) => error_response(e),
    }
}

// --- Hotels ---

#[derive(Deserialize)]
pub struct HotelQuery {
    pub city_id: Option<i32>,
}

pub async fn list_hotels(
    State(db): State<DatabaseConnection>,
    Query(params): Query<HotelQuery>,
) -> impl IntoResponse {
    match catalog_service::list_hotels(&db, params.city_id).await {
        Ok(hotels) => (StatusCode::OK, Json(hotels)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_hotel(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<HotelDto>,
) -> impl IntoResponse {
    match catalog_service::create_hotel(&db, payload).await {
        Ok(hotel) => (StatusCode::CREATED, Json(hotel)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_hotel(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::delete_hotel(&db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Hotel deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn toggle_hotel_beach_line(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::toggle_hotel_beach_line(&db, id).await {
        Ok(hotel) => (StatusCode::OK, Json(hotel)).into_response(),
        Err(e) => error_response(e),
    }
}

// --- Tour types ---

pub async fn list_tour_types(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match catalog_service::list_tour_types(&db).await {
        Ok(types) => (StatusCode::OK, Json(types)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_tour_type(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<TourTypeDto>,
) -> impl IntoResponse {
    match catalog_service::create_tour_type(&db, payload).await {
        Ok(tour_type) => (StatusCode::CREATED, Json(tour_type)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_tour_type(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::delete_tour_type(&db, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Tour type deleted" })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

// --- Tours ---

#[derive(Deserialize)]
pub struct TourQuery {
    #[serde(default)]
    pub active_only: bool,
}

pub async fn list_tours(
    State(db): State<DatabaseConnection>,
    Query(params): Query<TourQuery>,
) -> impl IntoResponse {
    match catalog_service::list_tours(&db, params.active_only).await {
        Ok(tours) => (StatusCode::OK, Json(tours)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_tour(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::get_tour(&db, id).await {
        Ok(tour) => (StatusCode::OK, Json(tour)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_tour(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<TourDto>,
) -> impl IntoResponse {
    match catalog_service::create_tour(&db, payload).await {
        Ok(tour) => (StatusCode::CREATED, Json(tour)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_tour(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::delete_tour(&db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Tour deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn toggle_tour_active(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::toggle_tour_active(&db, id).await {
        Ok(tour) => (StatusCode::OK, Json(tour)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn list_tour_hotels(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match catalog_service::list_tour_hotels(&db, id).await {
        Ok(stays) => (StatusCode::OK, Json(stays)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn set_tour_hotels(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<Vec<TourHotelDto>>,
) -> impl IntoResponse {
    match catalog_service::set_tour_hotels(&db, id, payload).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Tour hotels updated" })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
