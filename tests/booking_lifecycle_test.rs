use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use tourdesk::db;
use tourdesk::domain::ServiceError;
use tourdesk::models::booking::BookingDto;
use tourdesk::models::payment::PaymentDto;
use tourdesk::models::{city, client, country, employee, hotel, tour, tour_hotel, tour_type};
use tourdesk::services::booking_service;

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

async fn create_test_client(db: &DatabaseConnection, passport: &str) -> i32 {
    let client = client::ActiveModel {
        first_name: Set("Ivan".to_string()),
        last_name: Set("Sokolov".to_string()),
        name_latin: Set(Some("Ivan Sokolov".to_string())),
        passport_number: Set(passport.to_string()),
        passport_expiry: Set("2032-06-01".to_string()),
        birth_date: Set("1990-04-15".to_string()),
        gender: Set("male".to_string()),
        phone: Set("+79991234567".to_string()),
        email: Set(None),
        registration_date: Set("2024-01-10".to_string()),
        ..Default::default()
    };
    client.insert(db).await.expect("Failed to create client").id
}

async fn create_test_employee(db: &DatabaseConnection) -> i32 {
    let employee = employee::ActiveModel {
        first_name: Set("Anna".to_string()),
        last_name: Set("Petrova".to_string()),
        position: Set("Travel agent".to_string()),
        hire_date: Set("2022-03-01".to_string()),
        salary: Set(48000.0),
        is_active: Set(true),
        ..Default::default()
    };
    employee
        .insert(db)
        .await
        .expect("Failed to create employee")
        .id
}

async fn create_test_tour(db: &DatabaseConnection, base_price: f64) -> i32 {
    let tour_type = tour_type::ActiveModel {
        name: Set(format!("type-{}", base_price)),
        description: Set(None),
        ..Default::default()
    };
    let tour_type = tour_type
        .insert(db)
        .await
        .expect("Failed to create tour type");

    let tour = tour::ActiveModel {
        type_id: Set(tour_type.id),
        title: Set("Coastal escape".to_string()),
        description: Set(Some("A relaxing week near the sea.".to_string())),
        base_price: Set(base_price),
        is_active: Set(true),
        created_at: Set("2024-01-01T00:00:00Z".to_string()),
        ..Default::default()
    };
    tour.insert(db).await.expect("Failed to create tour").id
}

async fn create_test_hotel(
    db: &DatabaseConnection,
    stars: i32,
    beach_line: bool,
) -> i32 {
    let country = country::ActiveModel {
        name: Set(format!("Country-{}-{}", stars, beach_line)),
        visa_required: Set(false),
        created_at: Set("2024-01-01T00:00:00Z".to_string()),
        ..Default::default()
    };
    let country = country.insert(db).await.expect("Failed to create country");

    let city = city::ActiveModel {
        country_id: Set(country.id),
        name: Set("Resort town".to_string()),
        is_popular: Set(true),
        ..Default::default()
    };
    let city = city.insert(db).await.expect("Failed to create city");

    let hotel = hotel::ActiveModel {
        city_id: Set(city.id),
        name: Set("Test hotel".to_string()),
        stars: Set(stars),
        beach_line: Set(beach_line),
        created_at: Set("2024-01-01T00:00:00Z".to_string()),
        ..Default::default()
    };
    hotel.insert(db).await.expect("Failed to create hotel").id
}

async fn attach_hotel(db: &DatabaseConnection, tour_id: i32, hotel_id: i32, nights: i32) {
    let stay = tour_hotel::ActiveModel {
        tour_id: Set(tour_id),
        hotel_id: Set(hotel_id),
        nights: Set(nights),
    };
    stay.insert(db).await.expect("Failed to attach hotel");
}

fn booking_dto(client_id: i32, tour_id: i32, employee_id: i32, total: f64) -> BookingDto {
    BookingDto {
        client_id,
        tour_id,
        employee_id,
        departure_date: "2026-09-01".to_string(),
        return_date: "2026-09-08".to_string(),
        total_price: total,
        status: "confirmed".to_string(),
    }
}

#[tokio::test]
async fn quote_matches_reference_example() {
    let db = setup_test_db().await;

    // base 100, one 3-star hotel for 2 nights on the beach line, 7 days:
    // (100 + 3*1000*2) * 1.2 * (7/7) = 7320.00
    let tour_id = create_test_tour(&db, 100.0).await;
    let hotel_id = create_test_hotel(&db, 3, true).await;
    attach_hotel(&db, tour_id, hotel_id, 2).await;

    let total = booking_service::quote_price(&db, tour_id, "2026-09-01", "2026-09-08")
        .await
        .expect("Failed to quote");

    assert!((total - 7320.0).abs() < 1e-6, "got {}", total);
}

#[tokio::test]
async fn quote_beach_surcharge_compounds_in_hotel_id_order() {
    let db = setup_test_db().await;

    let tour_id = create_test_tour(&db, 100.0).await;
    let beach = create_test_hotel(&db, 3, true).await;
    let inland = create_test_hotel(&db, 4, false).await;
    attach_hotel(&db, tour_id, beach, 2).await;
    attach_hotel(&db, tour_id, inland, 1).await;

    // (100 + 6000) * 1.2 + 4000 = 11320; the inland hotel added later is
    // not touched by the earlier beach multiplier.
    let total = booking_service::quote_price(&db, tour_id, "2026-09-01", "2026-09-08")
        .await
        .expect("Failed to quote");

    assert!((total - 11320.0).abs() < 1e-6, "got {}", total);
}

#[tokio::test]
async fn quote_scales_with_days() {
    let db = setup_test_db().await;

    let tour_id = create_test_tour(&db, 700.0).await;

    // no hotels: 700 * (14/7) = 1400
    let total = booking_service::quote_price(&db, tour_id, "2026-09-01", "2026-09-15")
        .await
        .expect("Failed to quote");

    assert!((total - 1400.0).abs() < 1e-6, "got {}", total);
}

#[tokio::test]
async fn quote_unknown_tour_is_not_found() {
    let db = setup_test_db().await;

    let err = booking_service::quote_price(&db, 999, "2026-09-01", "2026-09-08")
        .await
        .expect_err("quote should fail");
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn booking_rejects_return_before_departure() {
    let db = setup_test_db().await;

    let client_id = create_test_client(&db, "AB123456").await;
    let employee_id = create_test_employee(&db).await;
    let tour_id = create_test_tour(&db, 100.0).await;

    let mut dto = booking_dto(client_id, tour_id, employee_id, 500.0);
    dto.return_date = dto.departure_date.clone();

    let err = booking_service::create_booking(&db, dto)
        .await
        .expect_err("booking should be rejected");
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn booking_rejects_unknown_references() {
    let db = setup_test_db().await;

    let client_id = create_test_client(&db, "AB123457").await;
    let employee_id = create_test_employee(&db).await;
    let tour_id = create_test_tour(&db, 100.0).await;

    let dto = booking_dto(999, tour_id, employee_id, 500.0);
    let err = booking_service::create_booking(&db, dto)
        .await
        .expect_err("unknown client should fail");
    assert!(matches!(err, ServiceError::NotFound));

    let dto = booking_dto(client_id, 999, employee_id, 500.0);
    let err = booking_service::create_booking(&db, dto)
        .await
        .expect_err("unknown tour should fail");
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn payments_flip_status_once_total_is_covered() {
    let db = setup_test_db().await;

    let client_id = create_test_client(&db, "AB123458").await;
    let employee_id = create_test_employee(&db).await;
    let tour_id = create_test_tour(&db, 100.0).await;

    let booking = booking_service::create_booking(
        &db,
        booking_dto(client_id, tour_id, employee_id, 100.0),
    )
    .await
    .expect("Failed to create booking");
    assert_eq!(booking.status, "confirmed");

    // First payment covers half: status must not move.
    booking_service::record_payment(
        &db,
        booking.id,
        PaymentDto {
            amount: 50.0,
            method: "card".to_string(),
            transaction_id: Some("tx-1".to_string()),
        },
    )
    .await
    .expect("Failed to record payment");

    let current = booking_service::get_booking(&db, booking.id)
        .await
        .expect("Failed to load booking");
    assert_eq!(current.status, "confirmed");

    // Second payment reaches the total: status flips to paid.
    booking_service::record_payment(
        &db,
        booking.id,
        PaymentDto {
            amount: 50.0,
            method: "card".to_string(),
            transaction_id: Some("tx-2".to_string()),
        },
    )
    .await
    .expect("Failed to record payment");

    let current = booking_service::get_booking(&db, booking.id)
        .await
        .expect("Failed to load booking");
    assert_eq!(current.status, "paid");
}

#[tokio::test]
async fn payment_rejects_bad_amount_and_unknown_booking() {
    let db = setup_test_db().await;

    let err = booking_service::record_payment(
        &db,
        999,
        PaymentDto {
            amount: 10.0,
            method: "cash".to_string(),
            transaction_id: None,
        },
    )
    .await
    .expect_err("unknown booking should fail");
    assert!(matches!(err, ServiceError::NotFound));

    let client_id = create_test_client(&db, "AB123459").await;
    let employee_id = create_test_employee(&db).await;
    let tour_id = create_test_tour(&db, 100.0).await;
    let booking = booking_service::create_booking(
        &db,
        booking_dto(client_id, tour_id, employee_id, 100.0),
    )
    .await
    .expect("Failed to create booking");

    let err = booking_service::record_payment(
        &db,
        booking.id,
        PaymentDto {
            amount: 0.0,
            method: "cash".to_string(),
            transaction_id: None,
        },
    )
    .await
    .expect_err("zero amount should fail");
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn payment_transaction_ids_are_unique() {
    let db = setup_test_db().await;

    let client_id = create_test_client(&db, "AB123460").await;
    let employee_id = create_test_employee(&db).await;
    let tour_id = create_test_tour(&db, 100.0).await;
    let booking = booking_service::create_booking(
        &db,
        booking_dto(client_id, tour_id, employee_id, 200.0),
    )
    .await
    .expect("Failed to create booking");

    booking_service::record_payment(
        &db,
        booking.id,
        PaymentDto {
            amount: 20.0,
            method: "card".to_string(),
            transaction_id: Some("tx-dup".to_string()),
        },
    )
    .await
    .expect("Failed to record payment");

    let err = booking_service::record_payment(
        &db,
        booking.id,
        PaymentDto {
            amount: 20.0,
            method: "card".to_string(),
            transaction_id: Some("tx-dup".to_string()),
        },
    )
    .await
    .expect_err("duplicate transaction id should fail");
    assert!(matches!(err, ServiceError::DuplicateKey(_)));
}

#[tokio::test]
async fn deleting_booking_removes_its_payments() {
    let db = setup_test_db().await;

    let client_id = create_test_client(&db, "AB123461").await;
    let employee_id = create_test_employee(&db).await;
    let tour_id = create_test_tour(&db, 100.0).await;
    let booking = booking_service::create_booking(
        &db,
        booking_dto(client_id, tour_id, employee_id, 100.0),
    )
    .await
    .expect("Failed to create booking");

    booking_service::record_payment(
        &db,
        booking.id,
        PaymentDto {
            amount: 30.0,
            method: "cash".to_string(),
            transaction_id: None,
        },
    )
    .await
    .expect("Failed to record payment");

    booking_service::delete_booking(&db, booking.id)
        .await
        .expect("Failed to delete booking");

    let err = booking_service::list_payments(&db, booking.id)
        .await
        .expect_err("booking should be gone");
    assert!(matches!(err, ServiceError::NotFound));

    let err = booking_service::delete_booking(&db, booking.id)
        .await
        .expect_err("second delete should fail");
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn status_updates_are_validated() {
    let db = setup_test_db().await;

    let client_id = create_test_client(&db, "AB123462").await;
    let employee_id = create_test_employee(&db).await;
    let tour_id = create_test_tour(&db, 100.0).await;
    let booking = booking_service::create_booking(
        &db,
        booking_dto(client_id, tour_id, employee_id, 100.0),
    )
    .await
    .expect("Failed to create booking");

    let updated = booking_service::update_booking_status(&db, booking.id, "cancelled")
        .await
        .expect("Failed to update status");
    assert_eq!(updated.status, "cancelled");

    let err = booking_service::update_booking_status(&db, booking.id, "archived")
        .await
        .expect_err("unknown status should fail");
    assert!(matches!(err, ServiceError::Validation(_)));
}
