use tracing::{debug, warn};

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a rejected login. The password never reaches this function.
pub fn login_failed(reason: &str, username: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username = %Redacted(username),
        reason,
        "Authentication failure"
    );
}

/// Log why a bearer token was refused. Debug only: the client always sees
/// the same outcome.
pub fn token_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();

    debug!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason,
        "Access token rejected"
    );
}
