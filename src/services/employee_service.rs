//! Employee Service - admin-gated personnel management
//!
//! Mutating operations take the caller's `Session` and refuse non-admins.

use sea_orm::*;

use crate::domain::{ServiceError, Session};
use crate::models::booking::{self, Entity as Booking};
use crate::models::employee::{self, EmployeeDto, Entity as Employee};
use crate::validation;

pub async fn list_employees(
    db: &DatabaseConnection,
) -> Result<Vec<employee::Model>, ServiceError> {
    let employees = Employee::find()
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await?;
    Ok(employees)
}

pub async fn list_active_employees(
    db: &DatabaseConnection,
) -> Result<Vec<employee::Model>, ServiceError> {
    let employees = Employee::find()
        .filter(employee::Column::IsActive.eq(true))
        .order_by_asc(employee::Column::LastName)
        .all(db)
        .await?;
    Ok(employees)
}

pub async fn create_employee(
    db: &DatabaseConnection,
    session: &Session,
    dto: EmployeeDto,
) -> Result<employee::Model, ServiceError> {
    session.require_admin()?;
    validation::validate_employee(&dto)?;

    let new_employee = employee::ActiveModel {
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        position: Set(dto.position),
        hire_date: Set(dto.hire_date),
        salary: Set(dto.salary),
        is_active: Set(dto.is_active),
        ..Default::default()
    };
    let saved = new_employee.insert(db).await?;

    tracing::info!(
        "employee {} created by {}",
        saved.id,
        session.username
    );
    Ok(saved)
}

pub async fn update_salary(
    db: &DatabaseConnection,
    session: &Session,
    id: i32,
    salary: f64,
) -> Result<employee::Model, ServiceError> {
    session.require_admin()?;
    validation::validate_salary(salary)?;

    let txn = db.begin().await?;

    let employee = Employee::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut active: employee::ActiveModel = employee.into();
    active.salary = Set(salary);
    let updated = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!("salary of employee {} changed by {}", id, session.username);
    Ok(updated)
}

pub async fn toggle_employee_active(
    db: &DatabaseConnection,
    session: &Session,
    id: i32,
) -> Result<employee::Model, ServiceError> {
    session.require_admin()?;

    let txn = db.begin().await?;

    let employee = Employee::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let is_active = employee.is_active;
    let mut active: employee::ActiveModel = employee.into();
    active.is_active = Set(!is_active);
    let updated = active.update(&txn).await?;
    txn.commit().await?;

    Ok(updated)
}

pub async fn delete_employee(
    db: &DatabaseConnection,
    session: &Session,
    id: i32,
) -> Result<(), ServiceError> {
    session.require_admin()?;

    let txn = db.begin().await?;

    let employee = Employee::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let bookings = Booking::find()
        .filter(booking::Column::EmployeeId.eq(id))
        .count(&txn)
        .await?;
    if bookings > 0 {
        return Err(ServiceError::HasDependents(
            "employee has existing bookings".into(),
        ));
    }

    employee.delete(&txn).await?;
    txn.commit().await?;

    tracing::info!("employee {} deleted by {}", id, session.username);
    Ok(())
}
