mod common;
mod support;

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::test;
use bookshelf::repos::reviews::list_for_book;
use common::assert_problem;
use serde_json::{json, Value};
use support::auth::bearer_header;
use support::create_test_app;
use support::factory::{create_book, dune, post_review};
use support::test_state::{build_test_state, TEST_USER};

#[actix_web::test]
async fn test_add_and_list_reviews() {
    let state = build_test_state().await;
    let auth = bearer_header(TEST_USER, &state.security);
    let app = create_test_app(state).await;

    let book_id = create_book(&app, &auth, &dune()).await["id"].as_i64().unwrap();

    let resp = post_review(
        &app,
        &auth,
        book_id,
        &json!({ "user_id": 1, "review_text": "A classic.", "rating": 5 }),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);
    let first: Value = test::read_body_json(resp).await;
    assert_eq!(first["book_id"], book_id);
    assert_eq!(first["user_id"], 1);
    assert_eq!(first["rating"], 5);

    let resp = post_review(&app, &auth, book_id, &json!({ "rating": 1 })).await;
    assert_eq!(resp.status().as_u16(), 200);
    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second["user_id"], Value::Null);
    assert_eq!(second["review_text"], Value::Null);

    let req = test::TestRequest::get()
        .uri(&format!("/books/{book_id}/reviews"))
        .insert_header((AUTHORIZATION, auth.as_str()))
        .to_request();
    let reviews: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reviews, vec![first, second]);
}

#[actix_web::test]
async fn test_rating_bounds() {
    let state = build_test_state().await;
    let auth = bearer_header(TEST_USER, &state.security);
    let app = create_test_app(state).await;

    let book_id = create_book(&app, &auth, &dune()).await["id"].as_i64().unwrap();

    for rating in [0, 6, -3] {
        assert_problem(
            post_review(&app, &auth, book_id, &json!({ "rating": rating })).await,
            StatusCode::BAD_REQUEST,
            "INVALID_RATING",
            "rating must be between 1 and 5",
        )
        .await;
    }

    for rating in [1, 5] {
        let resp = post_review(&app, &auth, book_id, &json!({ "rating": rating })).await;
        assert_eq!(resp.status().as_u16(), 200, "rating {rating} is in range");
    }
}

#[actix_web::test]
async fn test_reviews_of_missing_book_are_not_found() {
    let state = build_test_state().await;
    let auth = bearer_header(TEST_USER, &state.security);
    let app = create_test_app(state).await;

    assert_problem(
        post_review(&app, &auth, 999, &json!({ "rating": 3 })).await,
        StatusCode::NOT_FOUND,
        "BOOK_NOT_FOUND",
        "Book not found",
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/books/999/reviews")
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
async fn test_deleting_book_removes_its_reviews() {
    let state = build_test_state().await;
    let db = state.db().cloned().expect("in-memory db");
    let auth = bearer_header(TEST_USER, &state.security);
    let app = create_test_app(state).await;

    let doomed = create_book(&app, &auth, &dune()).await["id"].as_i64().unwrap();
    let survivor = create_book(&app, &auth, &dune()).await["id"].as_i64().unwrap();
    for id in [doomed, doomed, survivor] {
        let resp = post_review(&app, &auth, id, &json!({ "rating": 4 })).await;
        assert_eq!(resp.status().as_u16(), 200);
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/books/{doomed}"))
        .insert_header((AUTHORIZATION, auth.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    assert!(list_for_book(&db, doomed as i32).await.unwrap().is_empty());
    assert_eq!(list_for_book(&db, survivor as i32).await.unwrap().len(), 1);
}
