use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;

async fn me(current_user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(current_user))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)));
}
