use chrono::NaiveDate;

use crate::server::error::AppError;

/// Accepted date layouts, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Unwraps a required request field.
///
/// # Arguments
/// - `value` - The optional field from the request DTO
/// - `field` - JSON name of the field, used in the error message
///
/// # Returns
/// - `Ok(T)` - The field was present
/// - `Err(AppError::BadRequest)` - The field was missing or null
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| missing(field))
}

/// Unwraps a required text field, treating blank strings as missing.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing(field)),
    }
}

/// Parses a calendar date given as `YYYY-MM-DD` or `DD/MM/YYYY`.
///
/// # Arguments
/// - `value` - The raw date string from the request
/// - `field` - JSON name of the field, used in the error message
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::BadRequest)` - Neither layout matched
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "{} must be a date in YYYY-MM-DD or DD/MM/YYYY format, got '{}'.",
                field, value
            ))
        })
}

/// Parses an optional date field, passing `None` and blank strings through as `None`.
pub fn parse_optional_date(value: Option<String>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => parse_date(&text, field).map(Some),
        _ => Ok(None),
    }
}

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("{} is required.", field))
}
