use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::models::booking::BookingDto;
use crate::models::payment::PaymentDto;
use crate::services::booking_service::{self, BookingFilter};
use crate::services::report_service;

use super::error_response;

#[derive(Deserialize)]
pub struct BookingQuery {
    pub client_id: Option<i32>,
    pub tour_id: Option<i32>,
    pub status: Option<String>,
}

pub async fn list_bookings(
    State(db): State<DatabaseConnection>,
    Query(params): Query<BookingQuery>,
) -> impl IntoResponse {
    let filter = BookingFilter {
        client_id: params.client_id,
        tour_id: params.tour_id,
        status: params.status,
    };

    match booking_service::list_bookings(&db, filter).await {
        Ok(bookings) => (StatusCode::OK, Json(bookings)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_booking(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match booking_service::get_booking(&db, id).await {
        Ok(booking) => (StatusCode::OK, Json(booking)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_booking(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<BookingDto>,
) -> impl IntoResponse {
    match booking_service::create_booking(&db, payload).await {
        Ok(booking) => (StatusCode::CREATED, Json(booking)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_booking(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match booking_service::delete_booking(&db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Booking deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

pub async fn update_status(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusRequest>,
) -> impl IntoResponse {
    match booking_service::update_booking_status(&db, id, &payload.status).await {
        Ok(booking) => (StatusCode::OK, Json(booking)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn record_payment(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<PaymentDto>,
) -> impl IntoResponse {
    match booking_service::record_payment(&db, id, payload).await {
        Ok(payment) => (StatusCode::CREATED, Json(payment)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn list_payments(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match booking_service::list_payments(&db, id).await {
        Ok(payments) => (StatusCode::OK, Json(payments)).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
pub struct QuoteQuery {
    pub tour_id: i32,
    pub departure_date: String,
    pub return_date: String,
}

pub async fn quote_price(
    State(db): State<DatabaseConnection>,
    Query(params): Query<QuoteQuery>,
) -> impl IntoResponse {
    match booking_service::quote_price(
        &db,
        params.tour_id,
        &params.departure_date,
        &params.return_date,
    )
    .await
    {
        Ok(total) => (StatusCode::OK, Json(json!({ "total_price": total }))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn bookings_report(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match report_service::bookings_report(&db).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e),
    }
}
