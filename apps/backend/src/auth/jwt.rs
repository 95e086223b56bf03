use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::logging::security as security_log;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Lifetime used when the caller does not supply one.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Claims carried by backend-issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Username of the authenticated principal
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

fn unix_seconds(at: SystemTime) -> Result<i64, AppError> {
    at.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::internal("Failed to get current time"))
}

/// Mint a signed access token for `sub`, valid for `ttl` from `now`.
///
/// `None` falls back to [`DEFAULT_TOKEN_TTL`]. The HTTP login path always
/// passes the configured TTL.
pub fn mint_access_token(
    sub: &str,
    ttl: Option<Duration>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = unix_seconds(now)?;
    let exp = iat + ttl.unwrap_or(DEFAULT_TOKEN_TTL).as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and expiry and return the claims.
///
/// Every failure collapses to `UnauthorizedInvalidToken`; the concrete
/// reason is only logged.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        let reason = match e.kind() {
            ErrorKind::ExpiredSignature => "token_expired",
            ErrorKind::InvalidSignature => "invalid_signature",
            ErrorKind::InvalidAlgorithm => "invalid_algorithm",
            ErrorKind::MissingRequiredClaim(_) => "missing_claim",
            _ => "invalid_token",
        };
        security_log::token_rejected(reason);
        AppError::unauthorized_invalid_token()
    })?;

    // A token is dead at its exp second, not one past it.
    let now = unix_seconds(SystemTime::now())?;
    if claims.exp <= now {
        security_log::token_rejected("token_expired");
        return Err(AppError::unauthorized_invalid_token());
    }

    Ok(claims)
}
