use actix_web::{error, web};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::middleware::jwt_extract::JwtExtract;

pub mod auth;
pub mod books;
pub mod health;
pub mod intelligence;
pub mod reviews;
pub mod users;

fn bad_request(detail: String) -> error::Error {
    AppError::bad_request(ErrorCode::BadRequest, detail).into()
}

/// Register every route. Shared by `main.rs` and the integration tests so
/// both see the same middleware on the same paths.
///
/// `/health` and `/token` are public; everything else sits behind
/// `JwtExtract`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Extractor failures render as Problem Details like every other error
    cfg.app_data(web::QueryConfig::default().error_handler(|e, _| bad_request(e.to_string())))
        .app_data(web::PathConfig::default().error_handler(|e, _| bad_request(e.to_string())))
        .app_data(web::FormConfig::default().error_handler(|e, _| bad_request(e.to_string())));

    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Login: /token
    cfg.configure(auth::configure_routes);

    // Identity: /users/**
    cfg.service(
        web::scope("/users")
            .wrap(JwtExtract)
            .configure(users::configure_routes),
    );

    // Catalog: /books/**
    cfg.service(
        web::scope("/books")
            .wrap(JwtExtract)
            .configure(books::configure_routes)
            .configure(reviews::configure_routes)
            .configure(intelligence::configure_book_routes),
    );

    // Stub intelligence: /recommendations, /generate-summary
    cfg.configure(intelligence::configure_routes);
}
