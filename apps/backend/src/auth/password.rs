//! bcrypt password hashing.
//!
//! bcrypt only reads the first 72 bytes of its input. Longer passwords are
//! refused at hash time and never verify, so two passwords that share a
//! 72-byte prefix cannot stand in for each other.

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Longest password bcrypt hashes without truncation: its 72-byte input
/// includes the NUL terminator.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Hashes new passwords at a fixed cost and verifies stored hashes.
///
/// Holds a throwaway hash so a lookup miss can burn the same bcrypt work
/// as a real comparison.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self, AppError> {
        let dummy_hash = bcrypt::non_truncating_hash("bookshelf-timing-equalizer", cost)
            .map_err(|e| AppError::config(format!("invalid bcrypt cost {cost}: {e}")))?;
        Ok(Self { cost, dummy_hash })
    }

    /// Salted one-way hash; two calls on the same input differ.
    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("password must be at most {MAX_PASSWORD_BYTES} bytes"),
            ));
        }
        bcrypt::non_truncating_hash(plaintext, self.cost)
            .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))
    }

    /// True iff `plaintext` matches `hash`. A malformed hash, or a plaintext
    /// bcrypt would have to truncate, is a mismatch.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::non_truncating_verify(plaintext, hash).unwrap_or(false)
    }

    /// Spend one verification's worth of time and always fail.
    pub fn verify_dummy(&self, plaintext: &str) -> bool {
        let _ = bcrypt::non_truncating_verify(plaintext, &self.dummy_hash);
        false
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}
