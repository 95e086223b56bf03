use actix_web::{web, App, HttpServer};
use bookshelf::config::db::DbProfile;
use bookshelf::config::server::ServerConfig;
use bookshelf::infra::state::build_state;
use bookshelf::middleware::cors::cors_middleware;
use bookshelf::middleware::request_trace::RequestTrace;
use bookshelf::middleware::structured_logger::StructuredLogger;
use bookshelf::middleware::trace_span::TraceSpan;
use bookshelf::state::security_config::SecurityConfig;
use bookshelf::{routes, telemetry, AppError};
use tracing::{error, info};

async fn build() -> Result<(ServerConfig, web::Data<bookshelf::AppState>), AppError> {
    // Environment variables must be set by the runtime environment
    let server = ServerConfig::from_env()?;
    let security = SecurityConfig::from_env()?;
    let profile = DbProfile::from_env()?;

    let mut builder = build_state().with_db(profile.clone()).with_security(security);
    if let Some((username, password)) = &server.bootstrap_user {
        builder = builder.with_user(username, password);
    }
    let app_state = builder.build().await?;

    info!(profile = ?profile, "database connected");
    Ok((server, web::Data::new(app_state)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let (server, data) = match build().await {
        Ok(built) => built,
        Err(e) => {
            error!(error = %e, "failed to start");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, "starting bookshelf backend");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
