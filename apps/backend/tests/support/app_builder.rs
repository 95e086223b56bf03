use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use bookshelf::middleware::request_trace::RequestTrace;
use bookshelf::middleware::structured_logger::StructuredLogger;
use bookshelf::middleware::trace_span::TraceSpan;
use bookshelf::routes;
use bookshelf::state::app_state::AppState;

/// Build the production route table around `state`.
///
/// Same wrap order as `main.rs` minus CORS, which tests do not exercise.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
