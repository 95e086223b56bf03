use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Authenticated principal of the current request.
///
/// Built from the `Claims` that `JwtExtract` stored in request extensions,
/// then confirmed against the credential store: a verified token whose
/// subject no longer exists is rejected like a bad token.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let claims = req
                .extensions()
                .get::<Claims>()
                .cloned()
                .ok_or_else(AppError::unauthorized_missing_bearer)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let record = app_state
                .credentials
                .lookup(&claims.sub)
                .await?
                .ok_or_else(|| {
                    crate::logging::security::token_rejected("unknown_subject");
                    AppError::unauthorized_invalid_token()
                })?;

            Ok(CurrentUser {
                username: record.username,
            })
        })
    }
}
