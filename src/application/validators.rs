use crate::app_error::{AppError, AppResult};

/// Trims an identifier supplied by the caller and rejects blank ones.
pub fn require_identifier<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

/// Rate-limit values must be strictly positive.
pub fn require_positive(value: i32, field: &str) -> AppResult<i32> {
    if value < 1 {
        return Err(AppError::InvalidInput(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(value)
}
