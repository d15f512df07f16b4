use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use tourdesk::db;
use tourdesk::domain::{ServiceError, Session};
use tourdesk::models::employee::EmployeeDto;
use tourdesk::models::tour::TourDto;
use tourdesk::models::{client, employee};
use tourdesk::services::booking_service;
use tourdesk::services::catalog_service::{
    self, CityDto, CountryDto, HotelDto, TourHotelDto, TourTypeDto,
};
use tourdesk::services::employee_service;

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn admin_session() -> Session {
    Session {
        user_id: 1,
        username: "admin".to_string(),
        role: "admin".to_string(),
    }
}

fn manager_session() -> Session {
    Session {
        user_id: 2,
        username: "manager".to_string(),
        role: "manager".to_string(),
    }
}

async fn create_test_client(db: &DatabaseConnection) -> i32 {
    let client = client::ActiveModel {
        first_name: Set("Ivan".to_string()),
        last_name: Set("Sokolov".to_string()),
        name_latin: Set(None),
        passport_number: Set("AB123456".to_string()),
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

/// country -> city -> hotel -> tour (via tour_hotels) chain
async fn build_catalog_chain(db: &DatabaseConnection) -> (i32, i32, i32, i32, i32) {
    let country = catalog_service::create_country(
        db,
        CountryDto {
            name: "Turkey".to_string(),
            visa_required: false,
        },
    )
    .await
    .expect("Failed to create country");

    let city = catalog_service::create_city(
        db,
        CityDto {
            country_id: country.id,
            name: "Antalya".to_string(),
            is_popular: true,
        },
    )
    .await
    .expect("Failed to create city");

    let hotel = catalog_service::create_hotel(
        db,
        HotelDto {
            city_id: city.id,
            name: "Seaside Palace".to_string(),
            stars: 5,
            beach_line: true,
        },
    )
    .await
    .expect("Failed to create hotel");

    let tour_type = catalog_service::create_tour_type(
        db,
        TourTypeDto {
            name: "Beach".to_string(),
            description: None,
        },
    )
    .await
    .expect("Failed to create tour type");

    let tour = catalog_service::create_tour(
        db,
        TourDto {
            type_id: tour_type.id,
            title: "Turkish Riviera week".to_string(),
            description: Some("Seven nights on the Mediterranean coast.".to_string()),
            base_price: 500.0,
            is_active: true,
        },
    )
    .await
    .expect("Failed to create tour");

    catalog_service::set_tour_hotels(
        db,
        tour.id,
        vec![TourHotelDto {
            hotel_id: hotel.id,
            nights: 7,
        }],
    )
    .await
    .expect("Failed to attach hotel");

    (country.id, city.id, hotel.id, tour_type.id, tour.id)
}

#[tokio::test]
async fn guards_block_and_release_in_dependency_order() {
    let db = setup_test_db().await;
    let (country_id, city_id, hotel_id, type_id, tour_id) = build_catalog_chain(&db).await;

    let err = catalog_service::delete_country(&db, country_id)
        .await
        .expect_err("country has cities");
    assert!(matches!(err, ServiceError::HasDependents(_)));

    let err = catalog_service::delete_city(&db, city_id)
        .await
        .expect_err("city has hotels");
    assert!(matches!(err, ServiceError::HasDependents(_)));

    let err = catalog_service::delete_hotel(&db, hotel_id)
        .await
        .expect_err("hotel is used by a tour");
    assert!(matches!(err, ServiceError::HasDependents(_)));

    let err = catalog_service::delete_tour_type(&db, type_id)
        .await
        .expect_err("type has tours");
    assert!(matches!(err, ServiceError::HasDependents(_)));

    // Tear the chain down leaf-first; every delete now succeeds.
    catalog_service::delete_tour(&db, tour_id)
        .await
        .expect("Failed to delete tour");
    catalog_service::delete_tour_type(&db, type_id)
        .await
        .expect("Failed to delete tour type");
    catalog_service::delete_hotel(&db, hotel_id)
        .await
        .expect("Failed to delete hotel");
    catalog_service::delete_city(&db, city_id)
        .await
        .expect("Failed to delete city");
    catalog_service::delete_country(&db, country_id)
        .await
        .expect("Failed to delete country");
}

#[tokio::test]
async fn tour_with_bookings_cannot_be_deleted() {
    let db = setup_test_db().await;
    let (_, _, _, _, tour_id) = build_catalog_chain(&db).await;
    let client_id = create_test_client(&db).await;

    let session = admin_session();
    let agent = employee_service::create_employee(
        &db,
        &session,
        EmployeeDto {
            first_name: "Anna".to_string(),
            last_name: "Petrova".to_string(),
            position: "Travel agent".to_string(),
            hire_date: "2022-03-01".to_string(),
            salary: 48000.0,
            is_active: true,
        },
    )
    .await
    .expect("Failed to create employee");

    booking_service::create_booking(
        &db,
        tourdesk::models::booking::BookingDto {
            client_id,
            tour_id,
            employee_id: agent.id,
            departure_date: "2026-09-01".to_string(),
            return_date: "2026-09-08".to_string(),
            total_price: 500.0,
            status: "confirmed".to_string(),
        },
    )
    .await
    .expect("Failed to create booking");

    let err = catalog_service::delete_tour(&db, tour_id)
        .await
        .expect_err("tour has bookings");
    assert!(matches!(err, ServiceError::HasDependents(_)));

    let err = employee_service::delete_employee(&db, &session, agent.id)
        .await
        .expect_err("employee has bookings");
    assert!(matches!(err, ServiceError::HasDependents(_)));
}

#[tokio::test]
async fn duplicate_city_and_tour_type_names_are_rejected() {
    let db = setup_test_db().await;

    let country = catalog_service::create_country(
        &db,
        CountryDto {
            name: "Italy".to_string(),
            visa_required: true,
        },
    )
    .await
    .expect("Failed to create country");

    catalog_service::create_city(
        &db,
        CityDto {
            country_id: country.id,
            name: "Rome".to_string(),
            is_popular: true,
        },
    )
    .await
    .expect("Failed to create city");

    let err = catalog_service::create_city(
        &db,
        CityDto {
            country_id: country.id,
            name: "Rome".to_string(),
            is_popular: false,
        },
    )
    .await
    .expect_err("same (country, name) pair should fail");
    assert!(matches!(err, ServiceError::DuplicateKey(_)));

    catalog_service::create_tour_type(
        &db,
        TourTypeDto {
            name: "Excursion".to_string(),
            description: None,
        },
    )
    .await
    .expect("Failed to create tour type");

    let err = catalog_service::create_tour_type(
        &db,
        TourTypeDto {
            name: "Excursion".to_string(),
            description: Some("duplicate".to_string()),
        },
    )
    .await
    .expect_err("duplicate type name should fail");
    assert!(matches!(err, ServiceError::DuplicateKey(_)));
}

#[tokio::test]
async fn deleting_missing_records_is_not_found() {
    let db = setup_test_db().await;

    assert!(matches!(
        catalog_service::delete_country(&db, 999).await,
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(
        catalog_service::delete_city(&db, 999).await,
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(
        catalog_service::delete_hotel(&db, 999).await,
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(
        catalog_service::delete_tour(&db, 999).await,
        Err(ServiceError::NotFound)
    ));
    assert!(matches!(
        employee_service::delete_employee(&db, &admin_session(), 999).await,
        Err(ServiceError::NotFound)
    ));
}

#[tokio::test]
async fn toggles_flip_flags() {
    let db = setup_test_db().await;
    let (_, city_id, hotel_id, _, tour_id) = build_catalog_chain(&db).await;

    let hotel = catalog_service::toggle_hotel_beach_line(&db, hotel_id)
        .await
        .expect("Failed to toggle hotel");
    assert!(!hotel.beach_line);

    let city = catalog_service::toggle_city_popular(&db, city_id)
        .await
        .expect("Failed to toggle city");
    assert!(!city.is_popular);

    let tour = catalog_service::toggle_tour_active(&db, tour_id)
        .await
        .expect("Failed to toggle tour");
    assert!(!tour.is_active);

    let active = catalog_service::list_tours(&db, true)
        .await
        .expect("Failed to list tours");
    assert!(active.is_empty());
}

#[tokio::test]
async fn employee_management_requires_admin() {
    let db = setup_test_db().await;

    let dto = EmployeeDto {
        first_name: "Anna".to_string(),
        last_name: "Petrova".to_string(),
        position: "Travel agent".to_string(),
        hire_date: "2022-03-01".to_string(),
        salary: 48000.0,
        is_active: true,
    };

    let err = employee_service::create_employee(&db, &manager_session(), dto.clone())
        .await
        .expect_err("managers may not create employees");
    assert!(matches!(err, ServiceError::Forbidden));

    let admin = admin_session();
    let agent = employee_service::create_employee(&db, &admin, dto)
        .await
        .expect("Failed to create employee");

    let err = employee_service::update_salary(&db, &manager_session(), agent.id, 50000.0)
        .await
        .expect_err("managers may not change salaries");
    assert!(matches!(err, ServiceError::Forbidden));

    let updated = employee_service::update_salary(&db, &admin, agent.id, 50000.0)
        .await
        .expect("Failed to update salary");
    assert!((updated.salary - 50000.0).abs() < 1e-6);

    let err = employee_service::update_salary(&db, &admin, agent.id, 0.0)
        .await
        .expect_err("salary must stay positive");
    assert!(matches!(err, ServiceError::Validation(_)));

    let toggled = employee_service::toggle_employee_active(&db, &admin, agent.id)
        .await
        .expect("Failed to toggle employee");
    assert!(!toggled.is_active);

    employee_service::delete_employee(&db, &admin, agent.id)
        .await
        .expect("Failed to delete employee");

    let employees = employee::Entity::find_by_id(agent.id)
        .one(&db)
        .await
        .expect("Failed to query employee");
    assert!(employees.is_none());
}
