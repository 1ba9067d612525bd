//! Slug validation

use thiserror::Error;

/// Errors that can occur during slug validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlugValidationError {
    #[error("{0} slug cannot be empty")]
    Empty(&'static str),

    #[error("{0} slug cannot exceed {1} characters")]
    TooLong(&'static str, usize),

    #[error("{0} slug can only contain alphanumeric characters, hyphens and underscores")]
    InvalidCharacters(&'static str),

    #[error("{0} slug cannot start or end with a hyphen")]
    InvalidFormat(&'static str),
}

const MAX_SLUG_LENGTH: usize = 50;

/// Validate a remote-system slug (organization, project or team).
///
/// `kind` names the field being validated and only feeds error messages.
pub fn validate_slug(kind: &'static str, slug: &str) -> Result<(), SlugValidationError> {
    if slug.is_empty() {
        return Err(SlugValidationError::Empty(kind));
    }

    if slug.len() > MAX_SLUG_LENGTH {
        return Err(SlugValidationError::TooLong(kind, MAX_SLUG_LENGTH));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(SlugValidationError::InvalidCharacters(kind));
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(SlugValidationError::InvalidFormat(kind));
    }

    Ok(())
}
