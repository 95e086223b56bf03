//! Review repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::reviews_sea::{self as reviews_adapter, ReviewCreate};
use crate::entities::reviews;
use crate::errors::domain::DomainError;

/// Review domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub book_id: i32,
    pub user_id: Option<i32>,
    pub review_text: Option<String>,
    pub rating: i32,
}

/// Client-supplied review fields; `book_id` comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub review_text: Option<String>,
    pub rating: i32,
}

pub async fn create_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
    input: &ReviewInput,
) -> Result<Review, DomainError> {
    let dto = ReviewCreate {
        book_id,
        user_id: input.user_id,
        review_text: input.review_text.clone(),
        rating: input.rating,
    };
    let review = reviews_adapter::insert(conn, dto).await?;
    Ok(Review::from(review))
}

pub async fn list_for_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<Vec<Review>, DomainError> {
    let reviews = reviews_adapter::list_for_book(conn, book_id).await?;
    Ok(reviews.into_iter().map(Review::from).collect())
}

pub async fn delete_for_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<u64, DomainError> {
    Ok(reviews_adapter::delete_for_book(conn, book_id).await?)
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            book_id: model.book_id,
            user_id: model.user_id,
            review_text: model.review_text,
            rating: model.rating,
        }
    }
}
