use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::auth::password::PasswordHasher;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::logging::pii::Redacted;
use crate::repos::users::{self, UserRecord};

/// Outcome of [`provision_user`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyPresent,
}

/// Create `username` with a freshly hashed password unless it exists.
///
/// An existing user keeps its stored hash.
pub async fn provision_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<Provisioned, AppError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::config("bootstrap user needs a username and a password"));
    }

    if users::find_by_username(db, username).await?.is_some() {
        info!(username = %Redacted(username), "bootstrap user already present");
        return Ok(Provisioned::AlreadyPresent);
    }

    let hash = hasher.hash(password)?;
    match users::create_user(db, username, &hash).await {
        Ok(UserRecord { id, .. }) => {
            info!(user_id = id, username = %Redacted(username), "bootstrap user created");
            Ok(Provisioned::Created)
        }
        // Lost a race with another instance
        Err(DomainError::Conflict(ConflictKind::UniqueUsername, _)) => {
            warn!(username = %Redacted(username), "bootstrap user created concurrently");
            Ok(Provisioned::AlreadyPresent)
        }
        Err(e) => Err(e.into()),
    }
}
