use crate::utils::error::{MatchError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date, rejecting impossible days like 2023-02-30.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MatchError::InvalidDateError {
            input: input.to_string(),
            reason: "date cannot be empty".to_string(),
        });
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| MatchError::InvalidDateError {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("1996-09-01").unwrap(),
            NaiveDate::from_ymd_opt(1996, 9, 1).unwrap()
        );
        assert_eq!(
            parse_date("  2010-11-18 ").unwrap(),
            NaiveDate::from_ymd_opt(2010, 11, 18).unwrap()
        );
        assert!(parse_date("").is_err());
        assert!(parse_date("2023-02-30").is_err());
        assert!(parse_date("09/01/1996").is_err());
    }

    #[test]
    fn test_format_date_pads() {
        let date = NaiveDate::from_ymd_opt(2007, 1, 5).unwrap();
        assert_eq!(format_date(date), "2007-01-05");
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.path", "./store.json").is_ok());
        assert!(validate_path("storage.path", "").is_err());
        assert!(validate_path("storage.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("milestones.years_ahead", 5, 0, 50).is_ok());
        assert!(validate_range("milestones.years_ahead", 51, 0, 50).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("label", "Us Forever").is_ok());
        assert!(validate_non_empty_string("label", "   ").is_err());
    }
}
