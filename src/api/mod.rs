pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod clients;
pub mod employees;
pub mod health;
pub mod reviews;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::domain::ServiceError;

pub(crate) fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::DuplicateKey(_) => StatusCode::CONFLICT,
        ServiceError::HasDependents(_) => StatusCode::CONFLICT,
        ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Forbidden => StatusCode::FORBIDDEN,
        ServiceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

pub fn api_router(db: DatabaseConnection) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/users", post(auth::create_user))
        // Clients
        .route(
            "/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            "/clients/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/clients/:id/purge", post(clients::purge_client))
        .route("/clients/export", get(clients::export_clients))
        .route("/clients/import", post(clients::import_clients))
        // Bookings
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/bookings/quote", get(bookings::quote_price))
        .route("/bookings/report", get(bookings::bookings_report))
        .route(
            "/bookings/:id",
            get(bookings::get_booking).delete(bookings::delete_booking),
        )
        .route("/bookings/:id/status", put(bookings::update_status))
        .route(
            "/bookings/:id/payments",
            get(bookings::list_payments).post(bookings::record_payment),
        )
        // Countries & cities
        .route(
            "/countries",
            get(catalog::list_countries).post(catalog::create_country),
        )
        .route(
            "/countries/:id",
            axum::routing::delete(catalog::delete_country),
        )
        .route("/cities", get(catalog::list_cities).post(catalog::create_city))
        .route("/cities/:id", axum::routing::delete(catalog::delete_city))
        .route("/cities/:id/popular", put(catalog::toggle_city_popular))
        // Hotels
        .route("/hotels", get(catalog::list_hotels).post(catalog::create_hotel))
        .route("/hotels/:id", axum::routing::delete(catalog::delete_hotel))
        .route(
            "/hotels/:id/beach-line",
            put(catalog::toggle_hotel_beach_line),
        )
        // Tour types & tours
        .route(
            "/tour-types",
            get(catalog::list_tour_types).post(catalog::create_tour_type),
        )
        .route(
            "/tour-types/:id",
            axum::routing::delete(catalog::delete_tour_type),
        )
        .route("/tours", get(catalog::list_tours).post(catalog::create_tour))
        .route(
            "/tours/:id",
            get(catalog::get_tour).delete(catalog::delete_tour),
        )
        .route("/tours/:id/active", put(catalog::toggle_tour_active))
        .route(
            "/tours/:id/hotels",
            get(catalog::list_tour_hotels).put(catalog::set_tour_hotels),
        )
        .route("/tours/:id/reviews", get(reviews::list_tour_reviews))
        // Employees (admin)
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/:id",
            axum::routing::delete(employees::delete_employee),
        )
        .route("/employees/:id/salary", put(employees::update_salary))
        .route("/employees/:id/active", put(employees::toggle_active))
        // Reviews
        .route("/reviews", post(reviews::create_review))
        .route("/reviews/:id", axum::routing::delete(reviews::delete_review))
        .with_state(db)
}
