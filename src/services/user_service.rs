//! User Service - accounts and authentication

use sea_orm::*;
use serde::Deserialize;

use crate::auth::hash_password;
use crate::domain::{session, ServiceError, Session};
use crate::models::employee::Entity as Employee;
use crate::models::user::{self, Entity as User};

#[derive(Debug, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub role: String,
    pub employee_id: Option<i32>,
}

pub async fn create_user(
    db: &DatabaseConnection,
    dto: CreateUserDto,
) -> Result<user::Model, ServiceError> {
    if dto.username.trim().is_empty() {
        return Err(ServiceError::Validation("username is required".into()));
    }
    if dto.password.chars().count() < 4 {
        return Err(ServiceError::Validation(
            "password must be at least 4 characters".into(),
        ));
    }
    if !session::is_valid_role(&dto.role) {
        return Err(ServiceError::Validation(format!(
            "unknown role '{}'",
            dto.role
        )));
    }

    let txn = db.begin().await?;

    if User::find()
        .filter(user::Column::Username.eq(&dto.username))
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(ServiceError::DuplicateKey(
            "a user with this username already exists".into(),
        ));
    }

    if let Some(employee_id) = dto.employee_id {
        Employee::find_by_id(employee_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound)?;
    }

    let password_hash = hash_password(&dto.password)
        .map_err(|e| ServiceError::Database(format!("password hashing failed: {}", e)))?;

    let new_user = user::ActiveModel {
        username: Set(dto.username),
        password_hash: Set(password_hash),
        role: Set(dto.role),
        employee_id: Set(dto.employee_id),
        is_active: Set(true),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    let saved = new_user.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!("created user '{}' ({})", saved.username, saved.role);
    Ok(saved)
}

/// Verify credentials against the stored hash. Inactive accounts never
/// authenticate. Returns None on any mismatch so callers cannot tell a bad
/// password from a missing user.
pub async fn authenticate(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Option<Session>, ServiceError> {
    let user = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;

    let Some(user) = user else {
        return Ok(None);
    };

    let verified = crate::auth::verify_password(password, &user.password_hash)
        .unwrap_or(false);

    if verified && user.is_active {
        Ok(Some(Session {
            user_id: user.id,
            username: user.username,
            role: user.role,
        }))
    } else {
        Ok(None)
    }
}

pub async fn set_user_active(
    db: &DatabaseConnection,
    id: i32,
    active: bool,
) -> Result<user::Model, ServiceError> {
    let user = User::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut model: user::ActiveModel = user.into();
    model.is_active = Set(active);
    let updated = model.update(db).await?;
    Ok(updated)
}
