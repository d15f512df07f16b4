//! Client Service - Pure business logic without HTTP layer

use sea_orm::*;

use crate::domain::ServiceError;
use crate::models::booking::{self, Entity as Booking};
use crate::models::client::{self, ClientDto, Entity as Client};
use crate::models::payment::{self, Entity as Payment};
use crate::models::review::{self, Entity as Review};
use crate::validation;

/// List all clients
pub async fn list_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>, ServiceError> {
    let clients = Client::find()
        .order_by_asc(client::Column::Id)
        .all(db)
        .await?;
    Ok(clients)
}

/// Get a single client by ID
pub async fn get_client(db: &DatabaseConnection, id: i32) -> Result<client::Model, ServiceError> {
    Client::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)
}

/// Create a new client
pub async fn create_client(
    db: &DatabaseConnection,
    dto: ClientDto,
) -> Result<client::Model, ServiceError> {
    validation::validate_client(&dto)?;

    let txn = db.begin().await?;

    if Client::find()
        .filter(client::Column::PassportNumber.eq(&dto.passport_number))
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(ServiceError::DuplicateKey(
            "a client with this passport number already exists".into(),
        ));
    }

    let email = dto.email.filter(|e| !e.is_empty());
    if let Some(email) = email.as_deref() {
        if Client::find()
            .filter(client::Column::Email.eq(email))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(ServiceError::DuplicateKey(
                "a client with this email already exists".into(),
            ));
        }
    }

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let new_client = client::ActiveModel {
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        name_latin: Set(dto.name_latin.filter(|n| !n.is_empty())),
        passport_number: Set(dto.passport_number),
        passport_expiry: Set(dto.passport_expiry),
        birth_date: Set(dto.birth_date),
        gender: Set(dto.gender),
        phone: Set(dto.phone),
        email: Set(email),
        registration_date: Set(today),
        ..Default::default()
    };

    let saved = new_client.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!("created client {}", saved.id);
    Ok(saved)
}

/// Update an existing client
pub async fn update_client(
    db: &DatabaseConnection,
    id: i32,
    dto: ClientDto,
) -> Result<client::Model, ServiceError> {
    validation::validate_client(&dto)?;

    let txn = db.begin().await?;

    let existing = Client::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    if Client::find()
        .filter(client::Column::Id.ne(id))
        .filter(client::Column::PassportNumber.eq(&dto.passport_number))
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(ServiceError::DuplicateKey(
            "a client with this passport number already exists".into(),
        ));
    }

    let email = dto.email.filter(|e| !e.is_empty());
    if let Some(email) = email.as_deref() {
        if Client::find()
            .filter(client::Column::Id.ne(id))
            .filter(client::Column::Email.eq(email))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(ServiceError::DuplicateKey(
                "a client with this email already exists".into(),
            ));
        }
    }

    let mut active: client::ActiveModel = existing.into();
    active.first_name = Set(dto.first_name);
    active.last_name = Set(dto.last_name);
    active.name_latin = Set(dto.name_latin.filter(|n| !n.is_empty()));
    active.passport_number = Set(dto.passport_number);
    active.passport_expiry = Set(dto.passport_expiry);
    active.birth_date = Set(dto.birth_date);
    active.gender = Set(dto.gender);
    active.phone = Set(dto.phone);
    active.email = Set(email);

    let updated = active.update(&txn).await?;
    txn.commit().await?;

    Ok(updated)
}

/// Delete a client. Blocked while any booking still references the client;
/// the client's reviews are removed with them.
pub async fn delete_client(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let existing = Client::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let bookings = Booking::find()
        .filter(booking::Column::ClientId.eq(id))
        .count(&txn)
        .await?;
    if bookings > 0 {
        return Err(ServiceError::HasDependents(
            "client has existing bookings".into(),
        ));
    }

    Review::delete_many()
        .filter(review::Column::ClientId.eq(id))
        .exec(&txn)
        .await?;
    existing.delete(&txn).await?;
    txn.commit().await?;

    tracing::info!("deleted client {}", id);
    Ok(())
}

/// Remove a client together with their bookings, payments and reviews.
/// This is the cascading path; `delete_client` is the guarded one.
pub async fn purge_client(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let existing = Client::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let booking_ids: Vec<i32> = Booking::find()
        .filter(booking::Column::ClientId.eq(id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|b| b.id)
        .collect();

    if !booking_ids.is_empty() {
        Payment::delete_many()
            .filter(payment::Column::BookingId.is_in(booking_ids.clone()))
            .exec(&txn)
            .await?;
        Booking::delete_many()
            .filter(booking::Column::Id.is_in(booking_ids))
            .exec(&txn)
            .await?;
    }
    Review::delete_many()
        .filter(review::Column::ClientId.eq(id))
        .exec(&txn)
        .await?;
    existing.delete(&txn).await?;
    txn.commit().await?;

    tracing::warn!("purged client {} with all dependent records", id);
    Ok(())
}
