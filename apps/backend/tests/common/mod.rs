#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use bookshelf_test_support::problem_details::{assert_problem_details, ProblemDetailsLike};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    bookshelf_test_support::logging::init();
}

/// Assert the error contract and return the parsed body.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    status: StatusCode,
    code: &str,
    detail: &str,
) -> ProblemDetailsLike {
    assert_problem_details(resp, status, code, Some(detail)).await
}
