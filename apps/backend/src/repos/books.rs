//! Book repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

use crate::adapters::books_sea as books_adapter;
use crate::entities::books;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Book domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year_published: Option<i32>,
    pub summary: Option<String>,
}

/// Client-supplied book fields. Carries no id: the path owns identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year_published: Option<i32>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl BookInput {
    /// Overwrite every mutable column. Absent optionals clear the column.
    pub fn apply_to(&self, active: &mut books::ActiveModel) {
        active.title = Set(self.title.clone());
        active.author = Set(self.author.clone());
        active.genre = Set(self.genre.clone());
        active.year_published = Set(self.year_published);
        active.summary = Set(self.summary.clone());
    }
}

fn book_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Book, "Book not found")
}

pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: &BookInput,
) -> Result<Book, DomainError> {
    let mut active = books::ActiveModel::default();
    input.apply_to(&mut active);
    let book = books_adapter::insert(conn, active).await?;
    Ok(Book::from(book))
}

pub async fn find_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<Option<Book>, DomainError> {
    let book = books_adapter::find_by_id(conn, book_id).await?;
    Ok(book.map(Book::from))
}

/// Like [`find_book`] but a miss is `NotFound(Book)`.
pub async fn require_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<Book, DomainError> {
    find_book(conn, book_id).await?.ok_or_else(book_not_found)
}

pub async fn list_books<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<Book>, DomainError> {
    let books = books_adapter::list_page(conn, offset, limit).await?;
    Ok(books.into_iter().map(Book::from).collect())
}

pub async fn update_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
    input: &BookInput,
) -> Result<Book, DomainError> {
    let existing = books_adapter::find_by_id(conn, book_id)
        .await?
        .ok_or_else(book_not_found)?;

    let mut active = existing.into_active_model();
    input.apply_to(&mut active);
    let updated = books_adapter::update(conn, active).await?;
    Ok(Book::from(updated))
}

/// Deletes the book row only; callers own the review cleanup.
pub async fn delete_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<(), DomainError> {
    match books_adapter::delete_by_id(conn, book_id).await? {
        0 => Err(book_not_found()),
        _ => Ok(()),
    }
}

impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            genre: model.genre,
            year_published: model.year_published,
            summary: model.summary,
        }
    }
}
