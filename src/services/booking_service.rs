//! Booking Service - booking lifecycle, payments and price quoting

use sea_orm::*;

use crate::domain::ServiceError;
use crate::models::booking::{self, BookingDto, Entity as Booking};
use crate::models::client::Entity as Client;
use crate::models::employee::Entity as Employee;
use crate::models::hotel::Entity as Hotel;
use crate::models::payment::{self, Entity as Payment, PaymentDto};
use crate::models::tour::Entity as Tour;
use crate::models::tour_hotel::{self, Entity as TourHotel};
use crate::validation;

/// Filter parameters for listing bookings
#[derive(Debug, Default, Clone)]
pub struct BookingFilter {
    pub client_id: Option<i32>,
    pub tour_id: Option<i32>,
    pub status: Option<String>,
}

/// List bookings with optional filters
pub async fn list_bookings(
    db: &DatabaseConnection,
    filter: BookingFilter,
) -> Result<Vec<booking::Model>, ServiceError> {
    let mut condition = Condition::all();

    if let Some(client_id) = filter.client_id {
        condition = condition.add(booking::Column::ClientId.eq(client_id));
    }

    if let Some(tour_id) = filter.tour_id {
        condition = condition.add(booking::Column::TourId.eq(tour_id));
    }

    if let Some(status) = filter.status {
        condition = condition.add(booking::Column::Status.eq(status));
    }

    let bookings = Booking::find()
        .filter(condition)
        .order_by_desc(booking::Column::BookingDate)
        .all(db)
        .await?;
    Ok(bookings)
}

/// Get a single booking by ID
pub async fn get_booking(db: &DatabaseConnection, id: i32) -> Result<booking::Model, ServiceError> {
    Booking::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)
}

/// Indicative price for a tour over a date range.
///
/// The beach-line surcharge multiplies the running total, so its effect
/// compounds over hotels added earlier in the list. Hotels are walked in id
/// order to keep the quote deterministic.
pub async fn quote_price(
    db: &DatabaseConnection,
    tour_id: i32,
    departure_date: &str,
    return_date: &str,
) -> Result<f64, ServiceError> {
    let (departure, ret) = validation::validate_booking_dates(departure_date, return_date)?;

    let tour = Tour::find_by_id(tour_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let stays = TourHotel::find()
        .filter(tour_hotel::Column::TourId.eq(tour_id))
        .order_by_asc(tour_hotel::Column::HotelId)
        .find_also_related(Hotel)
        .all(db)
        .await?;

    let mut total = tour.base_price;
    for (stay, hotel) in stays {
        let hotel = hotel.ok_or(ServiceError::NotFound)?;
        total += hotel.stars as f64 * 1000.0 * stay.nights as f64;
        if hotel.beach_line {
            total *= 1.2;
        }
    }

    let days = (ret - departure).num_days();
    total *= days as f64 / 7.0;

    Ok(total)
}

/// Create a new booking
pub async fn create_booking(
    db: &DatabaseConnection,
    dto: BookingDto,
) -> Result<booking::Model, ServiceError> {
    validation::validate_booking_dates(&dto.departure_date, &dto.return_date)?;
    validation::validate_booking_status(&dto.status)?;
    if dto.total_price <= 0.0 {
        return Err(ServiceError::Validation(
            "total price must be greater than 0".into(),
        ));
    }

    let txn = db.begin().await?;

    Client::find_by_id(dto.client_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;
    Tour::find_by_id(dto.tour_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;
    Employee::find_by_id(dto.employee_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let new_booking = booking::ActiveModel {
        client_id: Set(dto.client_id),
        tour_id: Set(dto.tour_id),
        employee_id: Set(dto.employee_id),
        booking_date: Set(today),
        departure_date: Set(dto.departure_date),
        return_date: Set(dto.return_date),
        total_price: Set(dto.total_price),
        status: Set(dto.status),
        is_paid: Set(false),
        has_prepayment: Set(false),
        ..Default::default()
    };

    let saved = new_booking.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        "created booking {} for client {} on tour {}",
        saved.id,
        saved.client_id,
        saved.tour_id
    );
    Ok(saved)
}

/// Record a payment against a booking. When the cumulative paid amount
/// reaches the booking total, the booking flips to 'paid'.
pub async fn record_payment(
    db: &DatabaseConnection,
    booking_id: i32,
    dto: PaymentDto,
) -> Result<payment::Model, ServiceError> {
    if dto.amount <= 0.0 {
        return Err(ServiceError::Validation(
            "payment amount must be greater than 0".into(),
        ));
    }

    let txn = db.begin().await?;

    let booking = Booking::find_by_id(booking_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let transaction_id = dto.transaction_id.filter(|t| !t.is_empty());
    if let Some(tx_id) = transaction_id.as_deref() {
        if Payment::find()
            .filter(payment::Column::TransactionId.eq(tx_id))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(ServiceError::DuplicateKey(
                "a payment with this transaction id already exists".into(),
            ));
        }
    }

    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let new_payment = payment::ActiveModel {
        booking_id: Set(booking_id),
        amount: Set(dto.amount),
        payment_date: Set(now),
        method: Set(dto.method),
        transaction_id: Set(transaction_id),
        ..Default::default()
    };

    let saved = new_payment.insert(&txn).await?;

    let payments = Payment::find()
        .filter(payment::Column::BookingId.eq(booking_id))
        .all(&txn)
        .await?;
    let total_paid: f64 = payments.iter().map(|p| p.amount).sum();

    if total_paid >= booking.total_price {
        let mut active: booking::ActiveModel = booking.into();
        active.status = Set("paid".to_owned());
        active.update(&txn).await?;
        tracing::info!("booking {} fully paid ({:.2})", booking_id, total_paid);
    }

    txn.commit().await?;
    Ok(saved)
}

/// Explicit status change (cancel, complete, ...)
pub async fn update_booking_status(
    db: &DatabaseConnection,
    id: i32,
    status: &str,
) -> Result<booking::Model, ServiceError> {
    validation::validate_booking_status(status)?;

    let txn = db.begin().await?;

    let booking = Booking::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut active: booking::ActiveModel = booking.into();
    active.status = Set(status.to_owned());
    let updated = active.update(&txn).await?;
    txn.commit().await?;

    Ok(updated)
}

/// Delete a booking and its payments
pub async fn delete_booking(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let booking = Booking::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    Payment::delete_many()
        .filter(payment::Column::BookingId.eq(id))
        .exec(&txn)
        .await?;
    booking.delete(&txn).await?;
    txn.commit().await?;

    tracing::info!("deleted booking {}", id);
    Ok(())
}

/// List payments recorded for a booking
pub async fn list_payments(
    db: &DatabaseConnection,
    booking_id: i32,
) -> Result<Vec<payment::Model>, ServiceError> {
    Booking::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let payments = Payment::find()
        .filter(payment::Column::BookingId.eq(booking_id))
        .order_by_asc(payment::Column::Id)
        .all(db)
        .await?;
    Ok(payments)
}
