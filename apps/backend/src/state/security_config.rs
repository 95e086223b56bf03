use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::config::env::{optional_var, parse_var, secret_var};
use crate::error::AppError;

/// TTL the login endpoint applies when nothing is configured.
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Signing and hashing settings shared by every worker.
#[derive(Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (HMAC family only, defaults to HS256)
    pub algorithm: Algorithm,
    /// Lifetime of tokens minted at login
    pub access_token_ttl: Duration,
    /// bcrypt work factor for newly hashed passwords
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Load from the process environment.
    ///
    /// `BOOKSHELF_JWT_SECRET` is required; `BOOKSHELF_JWT_ALGORITHM`,
    /// `BOOKSHELF_TOKEN_TTL_MINUTES` and `BOOKSHELF_BCRYPT_COST` are optional.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = secret_var("BOOKSHELF_JWT_SECRET")
            .ok_or_else(|| AppError::config("BOOKSHELF_JWT_SECRET must be set"))?;

        let mut config = Self::new(secret.into_bytes());

        if let Some(alg) = optional_var("BOOKSHELF_JWT_ALGORITHM") {
            config.algorithm = parse_hmac_algorithm(&alg)?;
        }

        if let Some(minutes) = parse_var::<u64>("BOOKSHELF_TOKEN_TTL_MINUTES")? {
            if minutes == 0 {
                return Err(AppError::config(
                    "BOOKSHELF_TOKEN_TTL_MINUTES must be greater than zero",
                ));
            }
            config = config.with_access_token_ttl(Duration::from_secs(minutes * 60));
        }

        if let Some(cost) = parse_var::<u32>("BOOKSHELF_BCRYPT_COST")? {
            if !(4..=31).contains(&cost) {
                return Err(AppError::config(format!(
                    "BOOKSHELF_BCRYPT_COST must be within 4..=31, got {cost}"
                )));
            }
            config.bcrypt_cost = cost;
        }

        Ok(config)
    }

    /// Random secret and the cheapest bcrypt cost, for tests.
    pub fn for_tests() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string().into_bytes()).with_bcrypt_cost(4)
    }
}

/// Only symmetric schemes are accepted: the same secret signs and verifies.
fn parse_hmac_algorithm(raw: &str) -> Result<Algorithm, AppError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::config(format!(
            "BOOKSHELF_JWT_ALGORITHM must be one of HS256, HS384, HS512, got '{other}'"
        ))),
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
