//! Input validation for the insert forms
//!
//! Every add dialog runs its fields through these checks before touching
//! the store. A failed check aborts the operation with no side effects.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Accepted email shape: local part of letters/digits/`+_.-`, an `@`,
/// then a domain of letters/digits/`.-`
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").unwrap());

/// Date format for the add-event form
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format for the add-event form
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A rejected form input, with the message shown to the user
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    EmptyField,

    #[error("Invalid email format. Please enter a valid email.")]
    BadEmail,

    #[error("Capacity must be a valid number.")]
    BadCapacity,

    #[error("Date must match YYYY-MM-DD.")]
    BadDate,

    #[error("Time must match HH:MM:SS.")]
    BadTime,
}

/// Reject any empty (or whitespace-only) field
pub fn require_non_empty<'a, I>(fields: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    if fields.into_iter().any(|f| f.trim().is_empty()) {
        Err(ValidationError::EmptyField)
    } else {
        Ok(())
    }
}

/// Validate an email address against the accepted shape
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::BadEmail)
    }
}

/// Parse a capacity field as a positive integer
pub fn parse_capacity(input: &str) -> Result<i64, ValidationError> {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::BadCapacity),
    }
}

/// Parse an event date in `YYYY-MM-DD` form
pub fn parse_event_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| ValidationError::BadDate)
}

/// Parse an event time in `HH:MM:SS` form
pub fn parse_event_time(input: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT).map_err(|_| ValidationError::BadTime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty(["Ann", "a@x.com"]).is_ok());
        assert_eq!(
            require_non_empty(["Ann", ""]),
            Err(ValidationError::EmptyField)
        );
        assert_eq!(
            require_non_empty(["   ", "a@x.com"]),
            Err(ValidationError::EmptyField)
        );
    }

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last+tag@sub.domain.org").is_ok());
        assert!(validate_email("user_name-1@host").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_malformed_addresses() {
        assert_eq!(validate_email("no-at-sign"), Err(ValidationError::BadEmail));
        assert_eq!(validate_email("a@"), Err(ValidationError::BadEmail));
        assert_eq!(validate_email("@x.com"), Err(ValidationError::BadEmail));
        assert_eq!(
            validate_email("spaces in@local.com"),
            Err(ValidationError::BadEmail)
        );
        assert_eq!(
            validate_email("double@@x.com"),
            Err(ValidationError::BadEmail)
        );
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("120"), Ok(120));
        assert_eq!(parse_capacity(" 5 "), Ok(5));
        assert_eq!(parse_capacity("abc"), Err(ValidationError::BadCapacity));
        assert_eq!(parse_capacity("12.5"), Err(ValidationError::BadCapacity));
        assert_eq!(parse_capacity("0"), Err(ValidationError::BadCapacity));
        assert_eq!(parse_capacity("-3"), Err(ValidationError::BadCapacity));
    }

    #[test]
    fn test_parse_event_date() {
        assert_eq!(
            parse_event_date("2026-03-14"),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
        );
        assert_eq!(
            parse_event_date("14/03/2026"),
            Err(ValidationError::BadDate)
        );
        assert_eq!(
            parse_event_date("2026-13-01"),
            Err(ValidationError::BadDate)
        );
    }

    #[test]
    fn test_parse_event_time() {
        assert_eq!(
            parse_event_time("18:30:00"),
            Ok(NaiveTime::from_hms_opt(18, 30, 0).unwrap())
        );
        assert_eq!(parse_event_time("18:30"), Err(ValidationError::BadTime));
        assert_eq!(parse_event_time("25:00:00"), Err(ValidationError::BadTime));
    }
}
