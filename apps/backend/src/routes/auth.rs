use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::authenticator::Authenticator;
use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// OAuth2 password-flow form. Missing fields deserialize as empty and are
/// rejected like bad credentials.
#[derive(Deserialize)]
pub struct TokenForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Exchange username/password for a bearer token.
async fn issue_token(
    form: web::Form<TokenForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let TokenForm { username, password } = form.into_inner();

    let identity = Authenticator::new(app_state.credentials.as_ref(), &app_state.hasher)
        .authenticate(&username, &password)
        .await?;

    let access_token = mint_access_token(
        &identity.username,
        Some(app_state.security.access_token_ttl),
        SystemTime::now(),
        &app_state.security,
    )?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/token").route(web::post().to(issue_token)));
}
