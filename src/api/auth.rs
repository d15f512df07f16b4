use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{create_jwt, Claims};
use crate::domain::session::ROLE_MANAGER;
use crate::services::user_service::{self, CreateUserDto};

use super::error_response;

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

pub async fn login(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    tracing::info!("Login attempt for user: {}", payload.username);

    match user_service::authenticate(&db, &payload.username, &payload.password).await {
        Ok(Some(session)) => match create_jwt(&session) {
            Ok(token) => (StatusCode::OK, Json(json!({ "token": token }))).into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e })),
            )
                .into_response(),
        },
        Ok(None) => {
            tracing::warn!("Login rejected for user: {}", payload.username);
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid credentials" })),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    username: String,
    password: String,
    employee_id: Option<i32>,
}

/// Self-registration always creates a manager account.
pub async fn register(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let dto = CreateUserDto {
        username: payload.username,
        password: payload.password,
        role: ROLE_MANAGER.to_owned(),
        employee_id: payload.employee_id,
    };

    match user_service::create_user(&db, dto).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Admin-only: create an account with an arbitrary role.
pub async fn create_user(
    State(db): State<DatabaseConnection>,
    claims: Claims,
    Json(payload): Json<CreateUserDto>,
) -> impl IntoResponse {
    if let Err(e) = claims.session().require_admin() {
        return error_response(e);
    }

    match user_service::create_user(&db, payload).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => error_response(e),
    }
}
