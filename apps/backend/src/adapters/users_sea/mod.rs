//! SeaORM adapter for user repository.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
        password_hash: Set(dto.password_hash),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    user_active.insert(conn).await
}
