mod common;
mod support;

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::test;
use bookshelf::routes::auth::TokenResponse;
use bookshelf::verify_access_token;
use common::assert_problem;
use serde_json::Value;
use support::create_test_app;
use support::test_state::{build_test_state, TEST_PASSWORD, TEST_USER};

#[actix_web::test]
async fn test_login_issues_usable_bearer_token() {
    let state = build_test_state().await;
    let security = state.security.clone();
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", TEST_USER), ("password", TEST_PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let token: TokenResponse = test::read_body_json(resp).await;
    assert_eq!(token.token_type, "bearer");

    let claims = verify_access_token(&token.access_token, &security).unwrap();
    assert_eq!(claims.sub, TEST_USER);
    assert_eq!(
        claims.exp - claims.iat,
        security.access_token_ttl.as_secs() as i64
    );

    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me, serde_json::json!({ "username": "user1" }));
}

#[actix_web::test]
async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
    let app = create_test_app(build_test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", TEST_USER), ("password", "wrong")])
        .to_request();
    let wrong = assert_problem(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Incorrect username or password",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", "ghost"), ("password", TEST_PASSWORD)])
        .to_request();
    let unknown = assert_problem(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Incorrect username or password",
    )
    .await;

    assert_eq!(wrong.detail, unknown.detail);
    assert_eq!(wrong.title, unknown.title);
}

#[actix_web::test]
async fn test_username_is_case_sensitive() {
    let app = create_test_app(build_test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", "USER1"), ("password", TEST_PASSWORD)])
        .to_request();
    assert_problem(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Incorrect username or password",
    )
    .await;
}

#[actix_web::test]
async fn test_missing_form_fields_are_rejected_as_credentials() {
    let app = create_test_app(build_test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", TEST_USER)])
        .to_request();
    assert_problem(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Incorrect username or password",
    )
    .await;
}

#[actix_web::test]
async fn test_login_honours_configured_token_ttl() {
    let security = bookshelf::SecurityConfig::for_tests()
        .with_access_token_ttl(std::time::Duration::from_secs(60));
    let state = bookshelf::build_state()
        .with_db(bookshelf::DbProfile::InMemory)
        .with_security(security.clone())
        .with_user(TEST_USER, TEST_PASSWORD)
        .build()
        .await
        .unwrap();
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", TEST_USER), ("password", TEST_PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let token: TokenResponse = test::read_body_json(resp).await;
    let claims = verify_access_token(&token.access_token, &security).unwrap();
    assert_eq!(claims.exp - claims.iat, 60);
}

#[actix_web::test]
async fn test_password_sharing_long_prefix_is_rejected() {
    let stored = "p".repeat(bookshelf::auth::password::MAX_PASSWORD_BYTES);
    let state = bookshelf::build_state()
        .with_db(bookshelf::DbProfile::InMemory)
        .with_security(bookshelf::SecurityConfig::for_tests())
        .with_user("longpass", stored.clone())
        .build()
        .await
        .unwrap();
    let app = create_test_app(state).await;

    let extended = format!("{stored}-anything");
    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", "longpass"), ("password", extended.as_str())])
        .to_request();
    assert_problem(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Incorrect username or password",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", "longpass"), ("password", stored.as_str())])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 200);
}
