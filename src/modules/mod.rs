pub mod admin;
pub mod alumni;
pub mod conversation;
pub mod crud;
pub mod donation;
pub mod donation_payment;
pub mod event;
pub mod job;
pub mod message;
pub mod student;

use chrono::{NaiveDate, NaiveTime};
use validator::{ValidateUrl, ValidationError};

use crate::error::SeedError;

/// Midnight UTC of an ISO `YYYY-MM-DD` literal.
pub fn utc_date(literal: &str) -> Result<bson::DateTime, SeedError> {
    let day: NaiveDate = literal.parse()?;
    Ok(bson::DateTime::from_chrono(day.and_time(NaiveTime::MIN).and_utc()))
}

/// Link fields are stored as empty strings when absent.
pub(crate) fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_date_is_midnight() {
        let date = utc_date("2026-06-30").unwrap();
        assert_eq!(date.try_to_rfc3339_string().unwrap(), "2026-06-30T00:00:00Z");
    }

    #[test]
    fn test_utc_date_rejects_garbage() {
        assert!(matches!(utc_date("30/06/2026"), Err(SeedError::Date(_))));
    }

    #[test]
    fn test_optional_url() {
        assert!(optional_url("").is_ok());
        assert!(optional_url("https://github.com/arjunkapoor").is_ok());
        assert!(optional_url("github dot com").is_err());
    }
}
