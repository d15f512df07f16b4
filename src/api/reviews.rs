use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::models::review::ReviewDto;
use crate::services::review_service;

use super::error_response;

pub async fn list_tour_reviews(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match review_service::list_reviews_for_tour(&db, id).await {
        Ok(reviews) => (StatusCode::OK, Json(reviews)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_review(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<ReviewDto>,
) -> impl IntoResponse {
    match review_service::create_review(&db, payload).await {
        Ok(review) => (StatusCode::CREATED, Json(review)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_review(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match review_service::delete_review(&db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Review deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}
