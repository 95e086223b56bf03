//! Credential checks and bearer-token issuance.

pub mod authenticator;
pub mod credentials;
pub mod jwt;
pub mod password;

pub use authenticator::{AuthenticatedIdentity, Authenticator};
pub use credentials::{CredentialRecord, CredentialStore, InMemoryCredentialStore, SeaCredentialStore};
pub use jwt::{mint_access_token, verify_access_token, Claims};
pub use password::PasswordHasher;
