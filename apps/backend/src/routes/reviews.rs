use actix_web::{web, HttpResponse, Result};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::book_id::BookId;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::reviews::ReviewInput;
use crate::services::reviews as review_service;
use crate::state::app_state::AppState;

async fn add_review(
    _user: CurrentUser,
    book_id: BookId,
    body: ValidatedJson<ReviewInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let review = review_service::add_review(db, book_id.0, &body).await?;
    Ok(HttpResponse::Ok().json(review))
}

async fn list_reviews(
    _user: CurrentUser,
    book_id: BookId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let reviews = review_service::list_reviews(db, book_id.0).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{book_id}/reviews")
            .route(web::get().to(list_reviews))
            .route(web::post().to(add_review)),
    );
}
