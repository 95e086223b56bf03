use bookshelf::config::db::DbProfile;
use bookshelf::infra::state::build_state;
use bookshelf::state::app_state::AppState;
use bookshelf::state::security_config::SecurityConfig;

pub const TEST_USER: &str = "user1";
pub const TEST_PASSWORD: &str = "password";

/// Fresh in-memory database, migrated, with [`TEST_USER`] provisioned.
///
/// Each call gets its own SQLite database, so tests never share rows.
pub async fn build_test_state() -> AppState {
    build_state()
        .with_db(DbProfile::InMemory)
        .with_security(SecurityConfig::for_tests())
        .with_user(TEST_USER, TEST_PASSWORD)
        .build()
        .await
        .expect("build in-memory test state")
}
