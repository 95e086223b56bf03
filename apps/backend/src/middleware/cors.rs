use actix_cors::Cors;
use actix_web::http::header;

use crate::config::env::optional_var;

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Split a comma-separated origin list, dropping blanks, `null` and anything
/// that is not http(s).
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

/// CORS for the API, origins from `CORS_ALLOWED_ORIGINS`.
///
/// Falls back to localhost when nothing valid is configured.
pub fn cors_middleware() -> Cors {
    let configured = optional_var("CORS_ALLOWED_ORIGINS")
        .map(|raw| parse_allowed_origins(&raw))
        .unwrap_or_default();

    let origins: Vec<String> = if configured.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::WWW_AUTHENTICATE,
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
