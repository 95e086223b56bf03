use std::sync::Arc;

use crate::auth::credentials::{
    CredentialRecord, CredentialStore, InMemoryCredentialStore, SeaCredentialStore,
};
use crate::auth::password::PasswordHasher;
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::users::provision_user;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_profile: Option<DbProfile>,
    credential_store: Option<Arc<dyn CredentialStore>>,
    seed_users: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_profile: None,
            credential_store: None,
            seed_users: Vec::new(),
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Override the credential store. Without one, a database-backed state
    /// reads the `users` table and a database-less state starts empty.
    pub fn with_credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credential_store = Some(store);
        self
    }

    /// Ensure `username` exists with `password` once the state is built.
    ///
    /// With a database the user is provisioned into `users`; without one it
    /// lands in the in-memory store. Ignored when an explicit store was set.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.seed_users.push((username.into(), password.into()));
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let hasher = PasswordHasher::new(self.security_config.bcrypt_cost)?;

        let db = match self.db_profile {
            // single entrypoint: build + migrate
            Some(profile) => Some(bootstrap_db(profile).await?),
            None => None,
        };

        let credentials: Arc<dyn CredentialStore> = match (self.credential_store, &db) {
            (Some(store), _) => store,
            (None, Some(conn)) => {
                for (username, password) in &self.seed_users {
                    provision_user(conn, &hasher, username, password).await?;
                }
                Arc::new(SeaCredentialStore::new(conn.clone()))
            }
            (None, None) => {
                let mut store = InMemoryCredentialStore::new();
                for (username, password) in &self.seed_users {
                    store = store.with_record(CredentialRecord {
                        username: username.clone(),
                        password_hash: hasher.hash(password)?,
                    });
                }
                Arc::new(store)
            }
        };

        Ok(AppState::new(db, self.security_config, credentials, hasher))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
