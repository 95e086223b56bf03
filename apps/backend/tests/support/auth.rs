//! Bearer token helpers for tests

use std::time::{Duration, SystemTime};

use bookshelf::auth::jwt::mint_access_token;
use bookshelf::state::security_config::SecurityConfig;

/// Mint a token for `sub` valid for the default lifetime.
pub fn mint_test_token(sub: &str, sec: &SecurityConfig) -> String {
    mint_access_token(sub, None, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Full Authorization header value including the "Bearer " prefix
pub fn bearer_header(sub: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(sub, sec))
}

/// Token issued two hours ago, long past its expiry
pub fn mint_expired_token(sub: &str, sec: &SecurityConfig) -> String {
    let past_time = SystemTime::now()
        .checked_sub(Duration::from_secs(7200))
        .unwrap();
    mint_access_token(sub, None, past_time, sec).expect("should mint expired token successfully")
}
