//! Error codes for the Bookshelf API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Unknown username or wrong password (deliberately indistinguishable)
    InvalidCredentials,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Token malformed, forged, expired, or for a subject that no longer exists
    UnauthorizedInvalidToken,

    // Request Validation
    /// Book payload failed validation
    InvalidBook,
    /// Review rating outside 1..=5
    InvalidRating,
    /// Query parameter out of range
    InvalidQuery,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Request body over the accepted size
    PayloadTooLarge,

    // Resource Not Found
    BookNotFound,
    UserNotFound,
    NotFound,

    // Conflicts and constraint violations
    UniqueViolation,
    FkViolation,
    CheckViolation,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",

            Self::InvalidBook => "INVALID_BOOK",
            Self::InvalidRating => "INVALID_RATING",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::BookNotFound => "BOOK_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::InvalidCredentials.as_str(), "INVALID_CREDENTIALS");
        assert_eq!(
            ErrorCode::UnauthorizedMissingBearer.as_str(),
            "UNAUTHORIZED_MISSING_BEARER"
        );
        assert_eq!(
            ErrorCode::UnauthorizedInvalidToken.as_str(),
            "UNAUTHORIZED_INVALID_TOKEN"
        );
        assert_eq!(ErrorCode::InvalidRating.as_str(), "INVALID_RATING");
        assert_eq!(ErrorCode::BookNotFound.as_str(), "BOOK_NOT_FOUND");
        assert_eq!(ErrorCode::DbUnavailable.as_str(), "DB_UNAVAILABLE");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ErrorCode::FkViolation.to_string(), "FK_VIOLATION");
    }
}
