//! Field validation for catalog entities.
//!
//! Pure functions returning [`CoreError::Validation`], called by the HTTP
//! handlers before anything is persisted. Scalar bounds match the original
//! catalog constraints: non-empty bounded titles and names, positive
//! durations, birth dates strictly in the past.

use chrono::{NaiveDate, Utc};

use crate::error::CoreError;

/// Maximum length of a movie title.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length of an actor or genre name.
pub const MAX_NAME_LEN: usize = 100;

/// Validate a movie title: non-blank, at most [`MAX_TITLE_LEN`] chars.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title cannot be blank".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an actor or genre name: non-blank, at most [`MAX_NAME_LEN`] chars.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name cannot be blank".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a movie duration in minutes.
pub fn validate_duration(minutes: i32) -> Result<(), CoreError> {
    if minutes <= 0 {
        return Err(CoreError::Validation(
            "Duration must be greater than 0 minutes".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a birth date lies strictly in the past (UTC).
pub fn validate_birth_date(birth_date: NaiveDate) -> Result<(), CoreError> {
    if birth_date >= Utc::now().date_naive() {
        return Err(CoreError::Validation(
            "Birth date must be in the past".to_string(),
        ));
    }
    Ok(())
}

/// Validate a title-search needle: must contain at least one
/// non-whitespace character.
pub fn validate_search_title(needle: &str) -> Result<(), CoreError> {
    if needle.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title parameter cannot be empty".to_string(),
        ));
    }
    Ok(())
}
