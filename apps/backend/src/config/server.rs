use crate::config::env::{optional_var, parse_var, secret_var};
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

/// Bind address plus the optional user provisioned at start.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub bootstrap_user: Option<(String, String)>,
}

impl ServerConfig {
    /// `BACKEND_HOST`, `BACKEND_PORT`, and the
    /// `BOOKSHELF_BOOTSTRAP_USER`/`BOOKSHELF_BOOTSTRAP_PASSWORD` pair, which
    /// must be set together or not at all.
    pub fn from_env() -> Result<Self, AppError> {
        let host = optional_var("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var::<u16>("BACKEND_PORT")?.unwrap_or(DEFAULT_PORT);

        let bootstrap_user = match (
            optional_var("BOOKSHELF_BOOTSTRAP_USER"),
            secret_var("BOOKSHELF_BOOTSTRAP_PASSWORD"),
        ) {
            (Some(user), Some(password)) => Some((user, password)),
            (None, None) => None,
            _ => {
                return Err(AppError::config(
                    "BOOKSHELF_BOOTSTRAP_USER and BOOKSHELF_BOOTSTRAP_PASSWORD must be set together",
                ))
            }
        };

        Ok(Self {
            host,
            port,
            bootstrap_user,
        })
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field(
                "bootstrap_user",
                &self.bootstrap_user.as_ref().map(|(user, _)| user),
            )
            .finish()
    }
}
