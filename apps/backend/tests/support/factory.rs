//! HTTP-level fixtures

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, Error};
use serde_json::{json, Value};

pub fn dune() -> Value {
    json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "genre": "Science Fiction",
        "year_published": 1965,
        "summary": "Spice, sand and politics on Arrakis."
    })
}

pub fn book(title: &str) -> Value {
    json!({ "title": title, "author": "Test Author" })
}

/// POST the book and return the created record.
pub async fn create_book<S>(app: &S, auth: &str, body: &Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/books")
        .insert_header((AUTHORIZATION, auth))
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200, "book creation should succeed");
    test::read_body_json(resp).await
}

/// POST a review for `book_id` and return the response untouched.
pub async fn post_review<S>(app: &S, auth: &str, book_id: i64, body: &Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/books/{book_id}/reviews"))
        .insert_header((AUTHORIZATION, auth))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}
