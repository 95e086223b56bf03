use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::books;
use crate::repos::reviews::{self, Review, ReviewInput};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub fn validate_rating(rating: i32) -> Result<(), AppError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::InvalidRating,
            format!("rating must be between {MIN_RATING} and {MAX_RATING}"),
        ))
    }
}

/// Attach a review to an existing book.
pub async fn add_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
    input: &ReviewInput,
) -> Result<Review, AppError> {
    validate_rating(input.rating)?;
    books::require_book(conn, book_id).await?;
    let review = reviews::create_review(conn, book_id, input).await?;
    info!(book_id, review_id = review.id, rating = review.rating, "review added");
    Ok(review)
}

pub async fn list_reviews<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<Vec<Review>, AppError> {
    books::require_book(conn, book_id).await?;
    Ok(reviews::list_for_book(conn, book_id).await?)
}
