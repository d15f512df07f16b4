//! Field-level validation applied before domain operations touch the store.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::ServiceError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё \-]+$").unwrap());
static LATIN_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z \-]+$").unwrap());

pub const BOOKING_STATUSES: [&str; 4] = ["confirmed", "paid", "cancelled", "completed"];

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ServiceError::Validation(format!("{} must be a YYYY-MM-DD date", field)))
}

pub fn validate_email(email: Option<&str>) -> Result<(), ServiceError> {
    match email {
        None => Ok(()),
        Some(e) if e.is_empty() => Ok(()),
        Some(e) if EMAIL_RE.is_match(e) => Ok(()),
        Some(_) => Err(ServiceError::Validation("invalid email address".into())),
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ServiceError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ServiceError::Validation("invalid phone number".into()))
    }
}

pub fn validate_passport(passport: &str) -> Result<(), ServiceError> {
    if passport.chars().count() < 6 {
        return Err(ServiceError::Validation(
            "passport number must be at least 6 characters".into(),
        ));
    }
    Ok(())
}

pub fn validate_person_name(name: &str, field: &str) -> Result<(), ServiceError> {
    if name.trim().chars().count() < 2 {
        return Err(ServiceError::Validation(format!(
            "{} must be at least 2 characters",
            field
        )));
    }
    if !NAME_RE.is_match(name) {
        return Err(ServiceError::Validation(format!(
            "{} may only contain letters, spaces and hyphens",
            field
        )));
    }
    Ok(())
}

pub fn validate_latin_name(name: Option<&str>) -> Result<(), ServiceError> {
    match name {
        None => Ok(()),
        Some(n) if n.is_empty() => Ok(()),
        Some(n) if LATIN_NAME_RE.is_match(n) => Ok(()),
        Some(_) => Err(ServiceError::Validation(
            "latin name may only contain latin letters, spaces and hyphens".into(),
        )),
    }
}

/// Client date rules: birth date in the past, passport still valid, age 18..=120.
/// A client whose 18th birthday is today passes.
pub fn validate_client_dates(birth_date: &str, passport_expiry: &str) -> Result<(), ServiceError> {
    let birth = parse_date(birth_date, "birth_date")?;
    let expiry = parse_date(passport_expiry, "passport_expiry")?;
    let today = chrono::Local::now().date_naive();

    if birth > today {
        return Err(ServiceError::Validation(
            "birth date cannot be in the future".into(),
        ));
    }
    if expiry <= today {
        return Err(ServiceError::Validation("passport has expired".into()));
    }

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    if age < 18 {
        return Err(ServiceError::Validation(
            "client must be at least 18 years old".into(),
        ));
    }
    if age > 120 {
        return Err(ServiceError::Validation("implausible birth date".into()));
    }
    Ok(())
}

pub fn validate_client(dto: &crate::models::client::ClientDto) -> Result<(), ServiceError> {
    validate_person_name(&dto.first_name, "first name")?;
    validate_person_name(&dto.last_name, "last name")?;
    validate_latin_name(dto.name_latin.as_deref())?;
    validate_passport(&dto.passport_number)?;
    validate_phone(&dto.phone)?;
    validate_email(dto.email.as_deref())?;
    validate_client_dates(&dto.birth_date, &dto.passport_expiry)?;
    Ok(())
}

pub fn validate_tour(title: &str, description: Option<&str>, base_price: f64) -> Result<(), ServiceError> {
    if title.trim().chars().count() < 5 {
        return Err(ServiceError::Validation(
            "tour title must be at least 5 characters".into(),
        ));
    }
    if description.map_or(true, |d| d.trim().chars().count() < 20) {
        return Err(ServiceError::Validation(
            "tour description must be at least 20 characters".into(),
        ));
    }
    if base_price <= 0.0 {
        return Err(ServiceError::Validation(
            "base price must be greater than 0".into(),
        ));
    }
    Ok(())
}

pub fn validate_hotel(name: &str, stars: i32) -> Result<(), ServiceError> {
    if name.trim().chars().count() < 3 {
        return Err(ServiceError::Validation(
            "hotel name must be at least 3 characters".into(),
        ));
    }
    if !(1..=5).contains(&stars) {
        return Err(ServiceError::Validation(
            "star rating must be between 1 and 5".into(),
        ));
    }
    Ok(())
}

pub fn validate_employee(dto: &crate::models::employee::EmployeeDto) -> Result<(), ServiceError> {
    validate_person_name(&dto.first_name, "first name")?;
    validate_person_name(&dto.last_name, "last name")?;
    if dto.position.trim().chars().count() < 3 {
        return Err(ServiceError::Validation(
            "position must be at least 3 characters".into(),
        ));
    }
    validate_salary(dto.salary)?;
    let hire = parse_date(&dto.hire_date, "hire_date")?;
    if hire > chrono::Local::now().date_naive() {
        return Err(ServiceError::Validation(
            "hire date cannot be in the future".into(),
        ));
    }
    Ok(())
}

pub fn validate_salary(salary: f64) -> Result<(), ServiceError> {
    if salary <= 0.0 {
        return Err(ServiceError::Validation(
            "salary must be greater than 0".into(),
        ));
    }
    Ok(())
}

/// Parses both booking dates and checks return > departure.
pub fn validate_booking_dates(
    departure_date: &str,
    return_date: &str,
) -> Result<(NaiveDate, NaiveDate), ServiceError> {
    let departure = parse_date(departure_date, "departure_date")?;
    let ret = parse_date(return_date, "return_date")?;
    if ret <= departure {
        return Err(ServiceError::Validation(
            "return date must be after departure date".into(),
        ));
    }
    Ok((departure, ret))
}

pub fn validate_booking_status(status: &str) -> Result<(), ServiceError> {
    if BOOKING_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "unknown booking status '{}'",
            status
        )))
    }
}

pub fn validate_rating(rating: i32) -> Result<(), ServiceError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(ServiceError::Validation(
            "rating must be between 1 and 5".into(),
        ))
    }
}
