use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

use crate::trace_ctx;

/// Assigns every request a trace id.
///
/// The id is stored in request extensions as a `String`, made the task-local
/// value behind [`trace_ctx::trace_id`] for the whole downstream call, and
/// echoed in the `x-trace-id` response header. Wrap it outermost so error
/// bodies produced by inner layers carry the same id.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(trace_id.clone());

        let service = Rc::clone(&self.service);
        let scoped_id = trace_id.clone();

        Box::pin(async move {
            // Downstream `call` must run inside the scope too: inner
            // middleware may build error responses synchronously.
            let mut res =
                trace_ctx::with_trace_id(scoped_id, async move { service.call(req).await }).await?;

            if let Ok(value) = header::HeaderValue::from_str(&trace_id) {
                res.headers_mut()
                    .insert(header::HeaderName::from_static("x-trace-id"), value);
            }

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    async fn echo_trace() -> HttpResponse {
        HttpResponse::Ok().body(trace_ctx::trace_id())
    }

    #[actix_web::test]
    async fn test_header_matches_task_local() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/t", web::get().to(echo_trace)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/t").to_request()).await;
        let header = resp.headers().get("x-trace-id").unwrap().to_str().unwrap().to_string();
        let body = test::read_body(resp).await;

        assert_eq!(body, header.as_bytes());
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[actix_web::test]
    async fn test_ids_differ_per_request() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/t", web::get().to(echo_trace)),
        )
        .await;

        let a = test::call_service(&app, test::TestRequest::get().uri("/t").to_request()).await;
        let b = test::call_service(&app, test::TestRequest::get().uri("/t").to_request()).await;
        assert_ne!(a.headers().get("x-trace-id"), b.headers().get("x-trace-id"));
    }
}
