use crate::config::env::{must_var, optional_var};
use crate::error::AppError;

/// Database profile for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production Postgres database
    Prod,
    /// Test Postgres database - name must end with `_test`
    Test,
    /// Private SQLite in-memory database, gone when the pool closes
    InMemory,
}

impl DbProfile {
    /// Read `BOOKSHELF_DB` (`prod` | `test` | `memory`, default `prod`).
    pub fn from_env() -> Result<Self, AppError> {
        match optional_var("BOOKSHELF_DB").as_deref() {
            None | Some("prod") => Ok(DbProfile::Prod),
            Some("test") => Ok(DbProfile::Test),
            Some("memory") => Ok(DbProfile::InMemory),
            Some(other) => Err(AppError::config(format!(
                "BOOKSHELF_DB must be one of prod, test, memory, got '{other}'"
            ))),
        }
    }
}

/// Database owner for different access levels
#[derive(Debug, Clone, PartialEq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Builds a database URL from environment variables based on profile and owner
pub fn db_url(profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    if profile == DbProfile::InMemory {
        return Ok("sqlite::memory:".to_string());
    }

    let host = optional_var("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = optional_var("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
    let db_name = db_name(&profile)?;
    let (username, password) = credentials(owner)?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

fn db_name(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
        DbProfile::InMemory => Ok(":memory:".to_string()),
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("BOOKSHELF_OWNER_USER")?,
            must_var("BOOKSHELF_OWNER_PASSWORD")?,
        )),
    }
}
