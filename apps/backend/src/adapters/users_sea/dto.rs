//! DTOs for users_sea adapter.

/// DTO for creating a new user.
#[derive(Clone)]
pub struct UserCreate {
    pub username: String,
    pub password_hash: String,
}

impl UserCreate {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
