//! Placeholder summary and recommendation collaborators. Outputs are fixed.

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::books::Book;
use crate::services::reviews::{MAX_RATING, MIN_RATING};

pub const GENERATED_SUMMARY: &str = "This is a generated summary.";

pub fn generate_summary(_content: &str) -> String {
    GENERATED_SUMMARY.to_string()
}

/// Summarize the stored summary, falling back to the title.
pub fn summarize_book(book: &Book) -> String {
    let content = book.summary.as_deref().unwrap_or(&book.title);
    generate_summary(content)
}

pub fn recommend_books(_genre: &str, min_rating: i32) -> Result<Vec<String>, AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&min_rating) {
        return Err(AppError::invalid(
            ErrorCode::InvalidQuery,
            format!("min_rating must be between {MIN_RATING} and {MAX_RATING}"),
        ));
    }
    Ok(vec!["Book 1".into(), "Book 2".into(), "Book 3".into()])
}
