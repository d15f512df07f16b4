//! Report Service - flat-file exports and the bookings report

use sea_orm::*;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::ServiceError;
use crate::models::booking::{self, Entity as Booking};
use crate::models::client::{self, Entity as Client};
use crate::models::tour::{self, Entity as Tour};

/// Column layout of the clients export file. Field order is the column order.
#[derive(Debug, Serialize)]
struct ClientExportRecord {
    client_id: i32,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: String,
    passport_number: String,
    passport_expiry: String,
    name_latin: Option<String>,
    birth_date: String,
    gender: String,
}

/// One row of the bookings report
#[derive(Debug, Clone, Serialize)]
pub struct BookingReportRow {
    pub booking_id: i32,
    pub client_name: String,
    pub tour_title: String,
    pub booking_date: String,
    pub departure_date: String,
    pub return_date: String,
    pub total_price: f64,
    pub status: String,
}

/// Export all clients as CSV
pub async fn export_clients_csv(db: &DatabaseConnection) -> Result<Vec<u8>, ServiceError> {
    let clients = Client::find()
        .order_by_asc(client::Column::Id)
        .all(db)
        .await?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    for c in clients {
        writer
            .serialize(ClientExportRecord {
                client_id: c.id,
                first_name: c.first_name,
                last_name: c.last_name,
                email: c.email,
                phone: c.phone,
                passport_number: c.passport_number,
                passport_expiry: c.passport_expiry,
                name_latin: c.name_latin,
                birth_date: c.birth_date,
                gender: c.gender,
            })
            .map_err(|e| ServiceError::Database(format!("CSV write error: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| ServiceError::Database(format!("CSV write error: {}", e)))
}

/// Import clients from CSV. A malformed row fails the whole import and
/// nothing is persisted.
pub async fn import_clients_csv(
    db: &DatabaseConnection,
    content: &[u8],
) -> Result<usize, ServiceError> {
    let records = crate::import::parse_clients_csv(content).map_err(ServiceError::Validation)?;

    let txn = db.begin().await?;
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let mut imported = 0;

    for rec in records {
        let new_client = client::ActiveModel {
            first_name: Set(rec.first_name),
            last_name: Set(rec.last_name),
            name_latin: Set(rec.name_latin),
            passport_number: Set(rec.passport_number),
            passport_expiry: Set(rec.passport_expiry),
            birth_date: Set(rec.birth_date),
            gender: Set(rec.gender),
            phone: Set(rec.phone),
            email: Set(rec.email),
            registration_date: Set(today.clone()),
            ..Default::default()
        };
        new_client.insert(&txn).await?;
        imported += 1;
    }

    txn.commit().await?;
    tracing::info!("imported {} clients", imported);
    Ok(imported)
}

/// One record per booking joined with client name and tour title
pub async fn bookings_report(
    db: &DatabaseConnection,
) -> Result<Vec<BookingReportRow>, ServiceError> {
    let bookings_with_clients = Booking::find()
        .order_by_asc(booking::Column::Id)
        .find_also_related(Client)
        .all(db)
        .await?;

    let tour_ids: Vec<i32> = bookings_with_clients
        .iter()
        .map(|(b, _)| b.tour_id)
        .collect();

    let mut tour_titles: HashMap<i32, String> = HashMap::new();
    if !tour_ids.is_empty() {
        let tours = Tour::find()
            .filter(tour::Column::Id.is_in(tour_ids))
            .all(db)
            .await?;
        for t in tours {
            tour_titles.insert(t.id, t.title);
        }
    }

    let rows = bookings_with_clients
        .into_iter()
        .map(|(b, c)| {
            let client_name = c
                .map(|c| format!("{} {}", c.first_name, c.last_name))
                .unwrap_or_else(|| "Unknown".to_string());
            let tour_title = tour_titles
                .get(&b.tour_id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string());

            BookingReportRow {
                booking_id: b.id,
                client_name,
                tour_title,
                booking_date: b.booking_date,
                departure_date: b.departure_date,
                return_date: b.return_date,
                total_price: b.total_price,
                status: b.status,
            }
        })
        .collect();

    Ok(rows)
}
