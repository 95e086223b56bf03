use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Book id from the `{book_id}` path segment. Existence is checked by the
/// service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookId(pub i32);

fn parse_book_id(req: &HttpRequest) -> Result<BookId, AppError> {
    let raw = req.match_info().get("book_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::BadRequest, "Missing book_id parameter")
    })?;

    raw.parse::<i32>()
        .map(BookId)
        .map_err(|_| AppError::bad_request(ErrorCode::BadRequest, format!("Invalid book id: {raw}")))
}

impl FromRequest for BookId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_book_id(req))
    }
}
