use actix_web::http::header::HeaderValue;

use crate::AppError;

/// Parse `Bearer <token>`. The scheme match is exact and the token must be a
/// single non-empty segment.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

/// Bearer token from an optional header value. Missing, non-ASCII or
/// malformed values are all `UnauthorizedMissingBearer`.
pub fn bearer_from_header(value: Option<&HeaderValue>) -> Result<String, AppError> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(parse_bearer)
        .map(str::to_string)
        .ok_or_else(AppError::unauthorized_missing_bearer)
}
