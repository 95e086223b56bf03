use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::book_id::BookId;
use crate::extractors::current_user::CurrentUser;
use crate::middleware::jwt_extract::JwtExtract;
use crate::services::books as book_service;
use crate::services::intelligence::{generate_summary, recommend_books, summarize_book};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub genre: String,
    pub min_rating: i32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateSummaryQuery {
    pub content: String,
}

async fn book_summary(
    _user: CurrentUser,
    book_id: BookId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let book = book_service::get_book(db, book_id.0).await?;
    Ok(HttpResponse::Ok().json(SummaryResponse {
        summary: summarize_book(&book),
    }))
}

async fn recommendations(
    _user: CurrentUser,
    query: web::Query<RecommendationQuery>,
) -> Result<HttpResponse, AppError> {
    let titles = recommend_books(&query.genre, query.min_rating)?;
    Ok(HttpResponse::Ok().json(titles))
}

async fn generate(
    _user: CurrentUser,
    query: web::Query<GenerateSummaryQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(SummaryResponse {
        summary: generate_summary(&query.content),
    }))
}

/// Mounted inside the protected `/books` scope.
pub fn configure_book_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{book_id}/summary").route(web::get().to(book_summary)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/recommendations")
            .wrap(JwtExtract)
            .route(web::get().to(recommendations)),
    )
    .service(
        web::resource("/generate-summary")
            .wrap(JwtExtract)
            .route(web::post().to(generate)),
    );
}
