//! Credential lookup by username.
//!
//! The authenticator and the session extractor only ever read through
//! [`CredentialStore`]; swapping the in-memory map for the `users` table
//! touches nothing else.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::DomainError;
use crate::repos::users;

/// Username plus its one-way password hash.
#[derive(Clone, PartialEq)]
pub struct CredentialRecord {
    pub username: String,
    pub password_hash: String,
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl From<users::UserRecord> for CredentialRecord {
    fn from(user: users::UserRecord) -> Self {
        Self {
            username: user.username,
            password_hash: user.password_hash,
        }
    }
}

#[async_trait]
pub trait CredentialStore: Send + Sync + fmt::Debug {
    /// `Ok(None)` means "no such user"; `Err` is an infrastructure failure.
    async fn lookup(&self, username: &str) -> Result<Option<CredentialRecord>, DomainError>;
}

/// Fixed username → record map, loaded once.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCredentialStore {
    records: HashMap<String, CredentialRecord>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: CredentialRecord) -> Self {
        self.records.insert(record.username.clone(), record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<CredentialRecord> for InMemoryCredentialStore {
    fn from_iter<I: IntoIterator<Item = CredentialRecord>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |store, record| store.with_record(record))
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn lookup(&self, username: &str) -> Result<Option<CredentialRecord>, DomainError> {
        Ok(self.records.get(username).cloned())
    }
}

/// Reads the `users` table.
#[derive(Debug, Clone)]
pub struct SeaCredentialStore {
    db: DatabaseConnection,
}

impl SeaCredentialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for SeaCredentialStore {
    async fn lookup(&self, username: &str) -> Result<Option<CredentialRecord>, DomainError> {
        let user = users::find_by_username(&self.db, username).await?;
        Ok(user.map(CredentialRecord::from))
    }
}
