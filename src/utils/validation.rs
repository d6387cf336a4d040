use crate::utils::error::{DiffError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks a single calendar field against an inclusive range.
pub fn validate_field_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DiffError::InvalidTimestamp {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("{} must be between {} and {}", field_name, min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DiffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_single_char(field_name: &str, value: &str) -> Result<()> {
    if value.chars().count() != 1 {
        return Err(DiffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be exactly one character".to_string(),
        });
    }
    Ok(())
}
