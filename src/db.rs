use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Create employees table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            position TEXT NOT NULL,
            hire_date TEXT NOT NULL,
            salary REAL NOT NULL CHECK (salary > 0),
            is_active INTEGER NOT NULL DEFAULT 1
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create users table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL CHECK (role IN ('manager', 'admin')),
            employee_id INTEGER,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE SET NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create countries table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS countries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            visa_required INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create cities table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS cities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            country_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            is_popular INTEGER NOT NULL DEFAULT 0,
            UNIQUE (country_id, name),
            FOREIGN KEY (country_id) REFERENCES countries(id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create hotels table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS hotels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            city_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            stars INTEGER NOT NULL CHECK (stars BETWEEN 1 AND 5),
            beach_line INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            FOREIGN KEY (city_id) REFERENCES cities(id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create tour_types table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS tour_types (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create tours table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS tours (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            base_price REAL NOT NULL CHECK (base_price > 0),
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            FOREIGN KEY (type_id) REFERENCES tour_types(id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create tour_hotels junction table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS tour_hotels (
            tour_id INTEGER NOT NULL,
            hotel_id INTEGER NOT NULL,
            nights INTEGER NOT NULL CHECK (nights > 0),
            PRIMARY KEY (tour_id, hotel_id),
            FOREIGN KEY (tour_id) REFERENCES tours(id) ON DELETE CASCADE,
            FOREIGN KEY (hotel_id) REFERENCES hotels(id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create clients table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            name_latin TEXT,
            passport_number TEXT NOT NULL UNIQUE,
            passport_expiry TEXT NOT NULL,
            birth_date TEXT NOT NULL,
            gender TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT UNIQUE,
            registration_date TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create bookings table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id INTEGER NOT NULL,
            tour_id INTEGER NOT NULL,
            employee_id INTEGER NOT NULL,
            booking_date TEXT NOT NULL,
            departure_date TEXT NOT NULL,
            return_date TEXT NOT NULL,
            total_price REAL NOT NULL CHECK (total_price > 0),
            status TEXT NOT NULL CHECK (status IN ('confirmed', 'paid', 'cancelled', 'completed')),
            is_paid INTEGER NOT NULL DEFAULT 0,
            has_prepayment INTEGER NOT NULL DEFAULT 0,
            CHECK (return_date > departure_date),
            FOREIGN KEY (client_id) REFERENCES clients(id) ON DELETE CASCADE,
            FOREIGN KEY (tour_id) REFERENCES tours(id),
            FOREIGN KEY (employee_id) REFERENCES employees(id)
        );
        CREATE INDEX IF NOT EXISTS idx_bookings_client_id ON bookings(client_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_tour_id ON bookings(tour_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_status ON bookings(status);
        "#
        .to_owned(),
    ))
    .await?;

    // Create payments table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS payments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            booking_id INTEGER NOT NULL,
            amount REAL NOT NULL CHECK (amount > 0),
            payment_date TEXT NOT NULL,
            method TEXT NOT NULL,
            transaction_id TEXT UNIQUE,
            FOREIGN KEY (booking_id) REFERENCES bookings(id) ON DELETE CASCADE
        );
        CREATE INDEX IF NOT EXISTS idx_payments_booking_id ON payments(booking_id);
        "#
        .to_owned(),
    ))
    .await?;

    // Create reviews table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tour_id INTEGER NOT NULL,
            client_id INTEGER NOT NULL,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            comment TEXT,
            review_date TEXT NOT NULL,
            UNIQUE (tour_id, client_id),
            FOREIGN KEY (tour_id) REFERENCES tours(id),
            FOREIGN KEY (client_id) REFERENCES clients(id) ON DELETE CASCADE
        );
        CREATE INDEX IF NOT EXISTS idx_reviews_tour_id ON reviews(tour_id);
        "#
        .to_owned(),
    ))
    .await?;

    Ok(())
}
