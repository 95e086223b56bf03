use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::book_id::BookId;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::books::BookInput;
use crate::services::books::{self as book_service, Page};
use crate::state::app_state::AppState;

fn default_limit() -> u64 {
    Page::default().limit
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

async fn create_book(
    _user: CurrentUser,
    body: ValidatedJson<BookInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let book = book_service::create_book(db, &body).await?;
    Ok(HttpResponse::Ok().json(book))
}

async fn list_books(
    _user: CurrentUser,
    query: web::Query<ListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let books = book_service::list_books(db, Page::new(query.skip, query.limit)?).await?;
    Ok(HttpResponse::Ok().json(books))
}

async fn get_book(
    _user: CurrentUser,
    book_id: BookId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let book = book_service::get_book(db, book_id.0).await?;
    Ok(HttpResponse::Ok().json(book))
}

async fn update_book(
    _user: CurrentUser,
    book_id: BookId,
    body: ValidatedJson<BookInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let book = book_service::update_book(db, book_id.0, &body).await?;
    Ok(HttpResponse::Ok().json(book))
}

async fn delete_book(
    _user: CurrentUser,
    book_id: BookId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    book_service::delete_book(db, book_id.0).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Book deleted",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_books))
            .route(web::post().to(create_book)),
    )
    .service(
        web::resource("/{book_id}")
            .route(web::get().to(get_book))
            .route(web::put().to(update_book))
            .route(web::delete().to(delete_book)),
    );
}
