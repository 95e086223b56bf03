//! Problem Details assertions for backend responses.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE, WWW_AUTHENTICATE};
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Mirror of the backend's error body, kept local so this crate stays
/// independent of backend types.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert the stable error contract on already-split response parts and
/// return the parsed body.
///
/// Checks status, `application/problem+json`, `x-trace-id` parity with the
/// body, the code, the `/errors/{CODE}` type, and the bearer challenge on
/// (and only on) 401s.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status, "unexpected status");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let problem: ProblemDetailsLike = serde_json::from_slice(body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse error body as ProblemDetails. Raw body: {}",
            String::from_utf8_lossy(body)
        )
    });

    let trace_id_header = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id_header.is_empty(), "x-trace-id should not be empty");
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("/errors/{expected_code}"));

    let challenge = headers.get(WWW_AUTHENTICATE).and_then(|v| v.to_str().ok());
    if expected_status == StatusCode::UNAUTHORIZED {
        assert_eq!(challenge, Some("Bearer"), "401 must carry WWW-Authenticate: Bearer");
    } else {
        assert_eq!(challenge, None, "only 401 carries WWW-Authenticate");
    }

    if let Some(expected) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected),
            "Expected detail to contain '{expected}', but got '{}'",
            problem.detail
        );
    }

    problem
}

/// Consume a test `ServiceResponse` and assert the error contract on it.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_status,
        expected_code,
        expected_detail_contains,
    )
}
