use sea_orm::DatabaseConnection;
use serial_test::serial;

use tourdesk::auth::{create_jwt, decode_jwt, hash_password, verify_password};
use tourdesk::db;
use tourdesk::domain::{ServiceError, Session};
use tourdesk::services::user_service::{self, CreateUserDto};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn user_dto(username: &str, password: &str, role: &str) -> CreateUserDto {
    CreateUserDto {
        username: username.to_string(),
        password: password.to_string(),
        role: role.to_string(),
        employee_id: None,
    }
}

#[test]
fn password_hashes_are_salted_and_verifiable() {
    let first = hash_password("hunter2").expect("Failed to hash");
    let second = hash_password("hunter2").expect("Failed to hash");
    assert_ne!(first, second, "hashes must carry distinct salts");

    assert!(verify_password("hunter2", &first).expect("Failed to verify"));
    assert!(!verify_password("wrong", &first).expect("Failed to verify"));
}

#[tokio::test]
async fn authenticate_checks_password_and_active_flag() {
    let db = setup_test_db().await;

    let user = user_service::create_user(&db, user_dto("anna", "s3cret", "manager"))
        .await
        .expect("Failed to create user");

    let session = user_service::authenticate(&db, "anna", "s3cret")
        .await
        .expect("Failed to authenticate")
        .expect("credentials are valid");
    assert_eq!(session.username, "anna");
    assert_eq!(session.role, "manager");

    let rejected = user_service::authenticate(&db, "anna", "wrong")
        .await
        .expect("Failed to authenticate");
    assert!(rejected.is_none());

    let rejected = user_service::authenticate(&db, "nobody", "s3cret")
        .await
        .expect("Failed to authenticate");
    assert!(rejected.is_none());

    // Deactivated accounts stop authenticating even with the right password.
    user_service::set_user_active(&db, user.id, false)
        .await
        .expect("Failed to deactivate");
    let rejected = user_service::authenticate(&db, "anna", "s3cret")
        .await
        .expect("Failed to authenticate");
    assert!(rejected.is_none());
}

#[tokio::test]
async fn usernames_are_unique_and_roles_validated() {
    let db = setup_test_db().await;

    user_service::create_user(&db, user_dto("anna", "s3cret", "manager"))
        .await
        .expect("Failed to create user");

    let err = user_service::create_user(&db, user_dto("anna", "other", "admin"))
        .await
        .expect_err("duplicate username should fail");
    assert!(matches!(err, ServiceError::DuplicateKey(_)));

    let err = user_service::create_user(&db, user_dto("boris", "s3cret", "owner"))
        .await
        .expect_err("unknown role should fail");
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = user_service::create_user(&db, user_dto("boris", "abc", "manager"))
        .await
        .expect_err("short password should fail");
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn linked_employee_must_exist() {
    let db = setup_test_db().await;

    let mut dto = user_dto("anna", "s3cret", "manager");
    dto.employee_id = Some(999);

    let err = user_service::create_user(&db, dto)
        .await
        .expect_err("unknown employee should fail");
    assert!(matches!(err, ServiceError::NotFound));
}

#[test]
#[serial]
fn jwt_round_trips_session_claims() {
    unsafe { std::env::set_var("JWT_SECRET", "test-secret") };

    let session = Session {
        user_id: 7,
        username: "anna".to_string(),
        role: "admin".to_string(),
    };

    let token = create_jwt(&session).expect("Failed to create token");
    let claims = decode_jwt(&token).expect("Failed to decode token");
    assert_eq!(claims.sub, "anna");
    assert_eq!(claims.uid, 7);
    assert_eq!(claims.role, "admin");

    unsafe { std::env::remove_var("JWT_SECRET") };
}
