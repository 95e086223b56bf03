use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::info;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::books::{self, Book, BookInput};
use crate::repos::reviews;

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_AUTHOR_LEN: usize = 255;
pub const MAX_GENRE_LEN: usize = 50;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination window for book listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

/// Largest offset the SQL drivers bind; they take a signed 64-bit value.
pub const MAX_SKIP: u64 = i64::MAX as u64;

impl Page {
    /// Clamp `limit` into `1..=MAX_PAGE_SIZE`; reject a `skip` the database
    /// cannot bind.
    pub fn new(skip: u64, limit: u64) -> Result<Self, AppError> {
        if skip > MAX_SKIP {
            return Err(AppError::bad_request(
                ErrorCode::BadRequest,
                format!("skip must be at most {MAX_SKIP}"),
            ));
        }
        Ok(Self {
            skip,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

fn invalid_book(detail: impl Into<String>) -> AppError {
    AppError::invalid(ErrorCode::InvalidBook, detail)
}

fn check_required(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(invalid_book(format!("{field} must not be empty")));
    }
    if value.chars().count() > max {
        return Err(invalid_book(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn validate_book(input: &BookInput) -> Result<(), AppError> {
    check_required("title", &input.title, MAX_TITLE_LEN)?;
    check_required("author", &input.author, MAX_AUTHOR_LEN)?;
    if let Some(genre) = &input.genre {
        if genre.chars().count() > MAX_GENRE_LEN {
            return Err(invalid_book(format!(
                "genre must be at most {MAX_GENRE_LEN} characters"
            )));
        }
    }
    Ok(())
}

pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: &BookInput,
) -> Result<Book, AppError> {
    validate_book(input)?;
    let book = books::create_book(conn, input).await?;
    info!(book_id = book.id, "book created");
    Ok(book)
}

pub async fn get_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<Book, AppError> {
    Ok(books::require_book(conn, book_id).await?)
}

pub async fn list_books<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Page,
) -> Result<Vec<Book>, AppError> {
    Ok(books::list_books(conn, page.skip, page.limit).await?)
}

pub async fn update_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
    input: &BookInput,
) -> Result<Book, AppError> {
    validate_book(input)?;
    let book = books::update_book(conn, book_id, input).await?;
    info!(book_id, "book updated");
    Ok(book)
}

/// Remove a book and its reviews atomically.
pub async fn delete_book(db: &DatabaseConnection, book_id: i32) -> Result<(), AppError> {
    let removed_reviews = with_txn(db, |txn| {
        Box::pin(async move {
            books::require_book(txn, book_id).await?;
            let removed = reviews::delete_for_book(txn, book_id).await?;
            books::delete_book(txn, book_id).await?;
            Ok(removed)
        })
    })
    .await?;

    info!(book_id, removed_reviews, "book deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> BookInput {
        BookInput {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            genre: Some("Sci-Fi".into()),
            year_published: Some(1965),
            summary: None,
        }
    }

    #[test]
    fn test_page_clamps_limit() {
        assert_eq!(Page::new(0, 0).unwrap().limit, 1);
        assert_eq!(Page::new(0, 1000).unwrap().limit, MAX_PAGE_SIZE);
        assert_eq!(Page::new(5, 20).unwrap(), Page { skip: 5, limit: 20 });
        assert_eq!(Page::default(), Page { skip: 0, limit: 10 });
    }

    #[test]
    fn test_page_rejects_unbindable_skip() {
        assert_eq!(Page::new(MAX_SKIP, 10).unwrap().skip, MAX_SKIP);
        let err = Page::new(MAX_SKIP + 1, 10).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert!(Page::new(u64::MAX, 10).is_err());
    }

    #[test]
    fn test_valid_book_passes() {
        assert!(validate_book(&input()).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut book = input();
        book.title = "   ".into();
        let err = validate_book(&book).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidBook);
    }

    #[test]
    fn test_length_limits() {
        let mut book = input();
        book.author = "a".repeat(MAX_AUTHOR_LEN);
        assert!(validate_book(&book).is_ok());
        book.author.push('a');
        assert!(validate_book(&book).is_err());

        let mut book = input();
        book.genre = Some("g".repeat(MAX_GENRE_LEN + 1));
        assert!(validate_book(&book).is_err());
    }
}
