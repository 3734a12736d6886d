// StudyPalz - Credential store error types
//
// Engine errors never leave the store as-is: they are folded into
// `StoreError` and surfaced through the per-operation enums below.

use std::fmt;

use thiserror::Error;

/// Coarse classification of every failure the store can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Duplicate,
    InvalidCredentials,
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Duplicate => "DuplicateError",
            ErrorKind::InvalidCredentials => "InvalidCredentials",
            ErrorKind::Storage => "StorageError",
        };
        f.write_str(name)
    }
}

/// Infrastructure failure: the database or the password hasher.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database error: password hashing failed: {0}")]
    Hashing(String),
}

/// Caller-correctable input problems, detected before any storage access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required!")]
    MissingFields,

    #[error("Invalid email address!")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Username or email collided. Which one is deliberately not reported.
    #[error("Username or email already exists!")]
    Duplicate,

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl RegisterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegisterError::Validation(_) => ErrorKind::Validation,
            RegisterError::Duplicate => ErrorKind::Duplicate,
            RegisterError::Storage(_) => ErrorKind::Storage,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown username and wrong password are reported identically.
    #[error("Invalid credentials!")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl LoginError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoginError::Validation(_) => ErrorKind::Validation,
            LoginError::InvalidCredentials => ErrorKind::InvalidCredentials,
            LoginError::Storage(_) => ErrorKind::Storage,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_text() {
        assert_eq!(
            RegisterError::from(ValidationError::MissingFields).to_string(),
            "All fields are required!"
        );
        assert_eq!(
            RegisterError::from(ValidationError::InvalidEmail).to_string(),
            "Invalid email address!"
        );
        assert_eq!(
            RegisterError::Duplicate.to_string(),
            "Username or email already exists!"
        );
        assert_eq!(LoginError::InvalidCredentials.to_string(), "Invalid credentials!");
    }

    #[test]
    fn test_storage_error_carries_underlying_message() {
        let err = LoginError::from(StoreError::Hashing("bad params".to_string()));
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().starts_with("Database error:"));
        assert!(err.to_string().contains("bad params"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(RegisterError::Duplicate.kind(), ErrorKind::Duplicate);
        assert_eq!(
            LoginError::from(ValidationError::MissingFields).kind(),
            ErrorKind::Validation
        );
        assert_eq!(ErrorKind::InvalidCredentials.to_string(), "InvalidCredentials");
    }
}
