use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::credentials::CredentialStore;
#[cfg(test)]
use crate::auth::credentials::InMemoryCredentialStore;
use crate::auth::password::PasswordHasher;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Where login and session checks look users up
    pub credentials: Arc<dyn CredentialStore>,
    /// Hasher at the configured bcrypt cost
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        security: SecurityConfig,
        credentials: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            db,
            security,
            credentials,
            hasher,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = credentials;
        self
    }

    /// No database, no users, cheapest bcrypt cost.
    #[cfg(test)]
    pub fn for_tests_without_db() -> Self {
        let security = SecurityConfig::for_tests();
        let hasher = PasswordHasher::new(security.bcrypt_cost).unwrap();
        Self::new(
            None,
            security,
            Arc::new(InMemoryCredentialStore::new()),
            hasher,
        )
    }
}
