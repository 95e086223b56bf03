//! SeaORM adapter for the reviews table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::reviews;

pub mod dto;

pub use dto::ReviewCreate;

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ReviewCreate,
) -> Result<reviews::Model, sea_orm::DbErr> {
    let active = reviews::ActiveModel {
        id: NotSet,
        book_id: Set(dto.book_id),
        user_id: Set(dto.user_id),
        review_text: Set(dto.review_text),
        rating: Set(dto.rating),
    };
    active.insert(conn).await
}

pub async fn list_for_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<Vec<reviews::Model>, sea_orm::DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::BookId.eq(book_id))
        .order_by_asc(reviews::Column::Id)
        .all(conn)
        .await
}

pub async fn delete_for_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = reviews::Entity::delete_many()
        .filter(reviews::Column::BookId.eq(book_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
