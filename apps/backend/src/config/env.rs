//! Small helpers for reading configuration from the process environment.

use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Value of `name`, treating unset and blank as absent.
pub fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Secret material: read verbatim, only an unset or empty value is absent.
pub fn secret_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Required environment variable or a configuration error naming it.
pub fn must_var(name: &str) -> Result<String, AppError> {
    optional_var(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Parse an optional variable; a present but unparsable value is an error.
pub fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match optional_var(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
    }
}
