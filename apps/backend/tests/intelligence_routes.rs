mod common;
mod support;

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::test;
use common::assert_problem;
use serde_json::{json, Value};
use support::auth::bearer_header;
use support::create_test_app;
use support::factory::{book, create_book, dune};
use support::test_state::{build_test_state, TEST_USER};

const SUMMARY: &str = "This is a generated summary.";

#[actix_web::test]
async fn test_book_summary() {
    let state = build_test_state().await;
    let auth = bearer_header(TEST_USER, &state.security);
    let app = create_test_app(state).await;

    // one with a stored summary, one falling back to the title
    for body in [dune(), book("Untitled Draft")] {
        let id = create_book(&app, &auth, &body).await["id"].as_i64().unwrap();
        let req = test::TestRequest::get()
            .uri(&format!("/books/{id}/summary"))
            .insert_header((AUTHORIZATION, auth.as_str()))
            .to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp, json!({ "summary": SUMMARY }));
    }

    let req = test::TestRequest::get()
        .uri("/books/999/summary")
        .insert_header((AUTHORIZATION, auth.as_str()))
        .to_request();
    assert_problem(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "BOOK_NOT_FOUND",
        "Book not found",
    )
    .await;
}

#[actix_web::test]
async fn test_recommendations() {
    let state = build_test_state().await;
    let auth = bearer_header(TEST_USER, &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/recommendations?genre=Fantasy&min_rating=4")
        .insert_header((AUTHORIZATION, auth.as_str()))
        .to_request();
    let titles: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles, vec!["Book 1", "Book 2", "Book 3"]);
}

#[actix_web::test]
async fn test_recommendations_reject_bad_queries() {
    let state = build_test_state().await;
    let auth = bearer_header(TEST_USER, &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/recommendations?genre=Fantasy&min_rating=9")
        .insert_header((AUTHORIZATION, auth.as_str()))
        .to_request();
    assert_problem(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "INVALID_QUERY",
        "min_rating must be between 1 and 5",
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/recommendations?min_rating=3")
        .insert_header((AUTHORIZATION, auth.as_str()))
        .to_request();
    assert_problem(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        "genre",
    )
    .await;
}

#[actix_web::test]
async fn test_generate_summary() {
    let state = build_test_state().await;
    let auth = bearer_header(TEST_USER, &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/generate-summary?content=The%20spice%20must%20flow")
        .insert_header((AUTHORIZATION, auth.as_str()))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp, json!({ "summary": SUMMARY }));

    let req = test::TestRequest::post()
        .uri("/generate-summary?content=x")
        .to_request();
    assert_problem(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
        "Not authenticated",
    )
    .await;
}
