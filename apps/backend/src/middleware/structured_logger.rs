use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::Level;

use crate::auth::jwt::Claims;
use crate::logging::pii::redact;

/// Health checks poll these; their completions stay at debug.
const QUIET_PATHS: [&str; 1] = ["/health"];

/// One `request_completed` event per request.
///
/// Level follows the status, except that [`QUIET_PATHS`] always log at
/// debug. The event names the authenticated subject (redacted) when
/// `JwtExtract` admitted the request, and `-` otherwise.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

pub(crate) fn completion_level(path: &str, status: StatusCode) -> Level {
    if QUIET_PATHS.contains(&path) {
        Level::DEBUG
    } else if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// `tracing` macros need the level at compile time.
macro_rules! completed {
    ($level:expr, $($fields:tt)+) => {
        match $level {
            Level::ERROR => tracing::error!($($fields)+),
            Level::WARN => tracing::warn!($($fields)+),
            Level::INFO => tracing::info!($($fields)+),
            Level::DEBUG => tracing::debug!($($fields)+),
            _ => tracing::trace!($($fields)+),
        }
    };
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, subject) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().extensions().get::<Claims>().map(|c| redact(&c.sub)),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };
            let subject = subject.unwrap_or_else(|| "-".to_string());
            let duration_us = start.elapsed().as_micros() as u64;

            completed!(
                completion_level(&path, status),
                http.method = %method,
                url.path = %path,
                http.status_code = status.as_u16(),
                duration_us,
                trace_id = %trace_id,
                user.sub = %subject,
                "request_completed"
            );

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use actix_web::{test, web, App, HttpRequest, HttpResponse};
    use tracing_subscriber::fmt;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .filter(|l| l.contains("request_completed"))
                .map(str::to_string)
                .collect()
        }
    }

    async fn signed_in(req: HttpRequest) -> HttpResponse {
        req.extensions_mut().insert(Claims {
            sub: "user1".into(),
            iat: 0,
            exp: 0,
        });
        HttpResponse::Ok().finish()
    }

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[::core::prelude::v1::test]
    fn test_completion_level() {
        assert_eq!(completion_level("/books", StatusCode::OK), Level::INFO);
        assert_eq!(completion_level("/books", StatusCode::NOT_FOUND), Level::WARN);
        assert_eq!(
            completion_level("/books", StatusCode::SERVICE_UNAVAILABLE),
            Level::ERROR
        );
        assert_eq!(completion_level("/health", StatusCode::OK), Level::DEBUG);
        assert_eq!(
            completion_level("/health", StatusCode::INTERNAL_SERVER_ERROR),
            Level::DEBUG
        );
    }

    #[actix_web::test]
    async fn test_event_names_redacted_subject_and_skips_health_at_info() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .route("/me", web::get().to(signed_in))
                .route("/open", web::get().to(ok))
                .route("/health", web::get().to(ok)),
        )
        .await;

        for uri in ["/me", "/open", "/health"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert!(resp.status().is_success());
        }

        let lines = captured.lines();
        assert_eq!(lines.len(), 2, "health completion must stay below info: {lines:?}");
        assert!(lines[0].contains("url.path=/me"));
        assert!(lines[0].contains("user.sub=u***"));
        assert!(!lines[0].contains("user1"));
        assert!(lines[1].contains("url.path=/open"));
        assert!(lines[1].contains("user.sub=-"));
    }
}
