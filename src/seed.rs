use crate::auth::hash_password;
use crate::models::{city, country, employee, hotel, tour, tour_hotel, tour_type, user};
use sea_orm::*;

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Create Users
    let admin_password = hash_password("admin").unwrap();
    let manager_password = hash_password("manager").unwrap();

    let admin = user::ActiveModel {
        username: Set("admin".to_owned()),
        password_hash: Set(admin_password),
        role: Set("admin".to_owned()),
        employee_id: Set(None),
        is_active: Set(true),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };

    let manager = user::ActiveModel {
        username: Set("manager".to_owned()),
        password_hash: Set(manager_password),
        role: Set("manager".to_owned()),
        employee_id: Set(None),
        is_active: Set(true),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };

    user::Entity::insert(admin)
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(user::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec(db)
        .await?;

    user::Entity::insert(manager)
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(user::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec(db)
        .await?;

    // 2. Create an Employee
    let agent = employee::ActiveModel {
        first_name: Set("Anna".to_owned()),
        last_name: Set("Petrova".to_owned()),
        position: Set("Travel agent".to_owned()),
        hire_date: Set("2022-03-01".to_owned()),
        salary: Set(48000.0),
        is_active: Set(true),
        ..Default::default()
    };
    let agent = agent.insert(db).await?;

    // 3. Destinations
    let turkey = country::ActiveModel {
        name: Set("Turkey".to_owned()),
        visa_required: Set(false),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    let turkey = turkey.insert(db).await?;

    let antalya = city::ActiveModel {
        country_id: Set(turkey.id),
        name: Set("Antalya".to_owned()),
        is_popular: Set(true),
        ..Default::default()
    };
    let antalya = antalya.insert(db).await?;

    let seaside = hotel::ActiveModel {
        city_id: Set(antalya.id),
        name: Set("Seaside Palace".to_owned()),
        stars: Set(5),
        beach_line: Set(true),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    let seaside = seaside.insert(db).await?;

    // 4. Tours
    let beach_type = tour_type::ActiveModel {
        name: Set("Beach".to_owned()),
        description: Set(Some("Sun and sea holidays".to_owned())),
        ..Default::default()
    };
    let beach_type = beach_type.insert(db).await?;

    let riviera = tour::ActiveModel {
        type_id: Set(beach_type.id),
        title: Set("Turkish Riviera week".to_owned()),
        description: Set(Some(
            "Seven nights on the Mediterranean coast with breakfast included.".to_owned(),
        )),
        base_price: Set(500.0),
        is_active: Set(true),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    let riviera = riviera.insert(db).await?;

    let stay = tour_hotel::ActiveModel {
        tour_id: Set(riviera.id),
        hotel_id: Set(seaside.id),
        nights: Set(7),
    };
    stay.insert(db).await?;

    tracing::info!(
        "seeded demo data (employee {}, tour {})",
        agent.id,
        riviera.id
    );
    Ok(())
}
