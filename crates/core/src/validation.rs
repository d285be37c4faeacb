//! Client-side form validation.
//!
//! Every check here runs before a network call is attempted; the messages
//! are the ones shown inline next to the offending field.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{BookingError, BookingResult};
use crate::models::user::RegistrationRequest;

/// 10-15 digits, optionally prefixed with a country code `+`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9]{10,15}$").expect("valid regex"));

const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_phone(phone: &str) -> BookingResult<()> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(BookingError::Validation(
            "Please enter a valid phone number (10-15 digits, optionally starting with +)."
                .to_string(),
        ))
    }
}

pub fn validate_password(password: &str) -> BookingResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(BookingError::Validation(
            "Password must be at least 8 characters long.".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> BookingResult<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(BookingError::Validation(
            "Please fill in all fields.".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_registration(form: &RegistrationRequest, confirm_password: &str) -> BookingResult<()> {
    if form.first_name.trim().is_empty()
        || form.last_name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.phone.trim().is_empty()
        || form.password.is_empty()
    {
        return Err(BookingError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }

    if form.password != confirm_password {
        return Err(BookingError::Validation(
            "Passwords do not match.".to_string(),
        ));
    }

    validate_password(&form.password)?;
    validate_phone(&form.phone)?;

    Ok(())
}

/// Profile edits require every field, a valid phone, and an explicit
/// country code; the user service rejects national-format numbers.
pub fn validate_profile_update(
    first_name: &str,
    last_name: &str,
    phone: &str,
) -> BookingResult<()> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() || phone.trim().is_empty() {
        return Err(BookingError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }

    validate_phone(phone)?;

    if !phone.starts_with('+') {
        return Err(BookingError::Validation(
            "Please include your country code (e.g. +1, +353). Use the format \
             +<countrycode><number>."
                .to_string(),
        ));
    }

    Ok(())
}
