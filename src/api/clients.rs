use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::models::client::ClientDto;
use crate::services::{client_service, report_service};

use super::error_response;

pub async fn list_clients(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match client_service::list_clients(&db).await {
        Ok(clients) => (StatusCode::OK, Json(clients)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_client(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match client_service::get_client(&db, id).await {
        Ok(client) => (StatusCode::OK, Json(client)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_client(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<ClientDto>,
) -> impl IntoResponse {
    match client_service::create_client(&db, payload).await {
        Ok(client) => (StatusCode::CREATED, Json(client)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_client(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<ClientDto>,
) -> impl IntoResponse {
    match client_service::update_client(&db, id, payload).await {
        Ok(client) => (StatusCode::OK, Json(client)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_client(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match client_service::delete_client(&db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Client deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn purge_client(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match client_service::purge_client(&db, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Client and dependent records removed" })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn export_clients(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match report_service::export_clients_csv(&db).await {
        Ok(csv_bytes) => {
            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, "text/csv".parse().unwrap());
            headers.insert(
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"clients_export.csv\"".parse().unwrap(),
            );
            (StatusCode::OK, headers, csv_bytes).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn import_clients(
    State(db): State<DatabaseConnection>,
    body: Bytes,
) -> impl IntoResponse {
    match report_service::import_clients_csv(&db, &body).await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({ "imported": count })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
