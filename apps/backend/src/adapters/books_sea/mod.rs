//! SeaORM adapter for the books table.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, QuerySelect,
};

use crate::entities::books;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    books::Entity::find_by_id(book_id).one(conn).await
}

pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .order_by_asc(books::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    active: books::ActiveModel,
) -> Result<books::Model, sea_orm::DbErr> {
    active.insert(conn).await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    active: books::ActiveModel,
) -> Result<books::Model, sea_orm::DbErr> {
    active.update(conn).await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = books::Entity::delete_by_id(book_id).exec(conn).await?;
    Ok(result.rows_affected)
}
