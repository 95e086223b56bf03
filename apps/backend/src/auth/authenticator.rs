use actix_web::web;
use tracing::info;

use super::credentials::CredentialStore;
use super::password::PasswordHasher;
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::logging::security;

/// Principal proven by a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub username: String,
}

/// Checks a username/password pair against a [`CredentialStore`].
pub struct Authenticator<'a> {
    store: &'a dyn CredentialStore,
    hasher: &'a PasswordHasher,
}

impl<'a> Authenticator<'a> {
    pub fn new(store: &'a dyn CredentialStore, hasher: &'a PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Unknown user and wrong password are indistinguishable to the caller:
    /// both return `InvalidCredentials` after one bcrypt verification.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedIdentity, AppError> {
        if username.is_empty() || password.is_empty() {
            security::login_failed("empty_field", username);
            return Err(AppError::invalid_credentials());
        }

        let record = self.store.lookup(username).await?;

        let hasher = self.hasher.clone();
        let candidate = password.to_string();
        let stored_hash = record.as_ref().map(|r| r.password_hash.clone());

        let matched = web::block(move || match stored_hash {
            Some(hash) => hasher.verify(&candidate, &hash),
            None => hasher.verify_dummy(&candidate),
        })
        .await
        .map_err(|e| AppError::internal(format!("password verification task failed: {e}")))?;

        match record {
            Some(record) if matched => {
                info!(username = %Redacted(&record.username), "login succeeded");
                Ok(AuthenticatedIdentity {
                    username: record.username,
                })
            }
            Some(record) => {
                security::login_failed("password_mismatch", &record.username);
                Err(AppError::invalid_credentials())
            }
            None => {
                security::login_failed("unknown_user", username);
                Err(AppError::invalid_credentials())
            }
        }
    }
}
