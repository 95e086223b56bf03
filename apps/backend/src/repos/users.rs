//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::errors::domain::DomainError;

/// Stored user with its password hash.
#[derive(Clone, PartialEq)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: time::OffsetDateTime,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<UserRecord>, DomainError> {
    let user = users_adapter::find_by_username(conn, username).await?;
    Ok(user.map(UserRecord::from))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password_hash: &str,
) -> Result<UserRecord, DomainError> {
    let dto = users_adapter::UserCreate::new(username, password_hash);
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(UserRecord::from(user))
}

impl From<crate::entities::users::Model> for UserRecord {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
