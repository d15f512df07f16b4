use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::auth::Claims;
use crate::models::employee::EmployeeDto;
use crate::services::employee_service;

use super::error_response;

pub async fn list_employees(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match employee_service::list_employees(&db).await {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_employee(
    State(db): State<DatabaseConnection>,
    claims: Claims,
    Json(payload): Json<EmployeeDto>,
) -> impl IntoResponse {
    match employee_service::create_employee(&db, &claims.session(), payload).await {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
pub struct SalaryRequest {
    pub salary: f64,
}

pub async fn update_salary(
    State(db): State<DatabaseConnection>,
    claims: Claims,
    Path(id): Path<i32>,
    Json(payload): Json<SalaryRequest>,
) -> impl IntoResponse {
    match employee_service::update_salary(&db, &claims.session(), id, payload.salary).await {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn toggle_active(
    State(db): State<DatabaseConnection>,
    claims: Claims,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match employee_service::toggle_employee_active(&db, &claims.session(), id).await {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_employee(
    State(db): State<DatabaseConnection>,
    claims: Claims,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match employee_service::delete_employee(&db, &claims.session(), id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Employee deleted" })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
