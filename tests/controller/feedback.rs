use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use formgate::{
    controller::feedback::get_feedback,
    model::{api::FeedbackPageDto, session::student::SessionStudentNumber},
};
use formgate_test_utils::prelude::*;

use crate::util::test_state;

#[tokio::test]
/// Expect 307 temporary redirect to the login page without a student number in session
async fn redirects_to_login_page_when_not_logged_in() -> Result<(), TestError> {
    let test = TestSetup::new();

    let result = get_feedback(State(test_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), TEST_LOGIN_URL);

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect when the stored student number is the empty string
async fn redirects_to_login_page_for_empty_session_value() -> Result<(), TestError> {
    let test = TestSetup::new();
    SessionStudentNumber::insert(&test.session, "").await.unwrap();

    let result = get_feedback(State(test_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the student number echoed back when logged in
async fn serves_feedback_page_when_logged_in() -> Result<(), TestError> {
    let test = TestSetup::new();
    SessionStudentNumber::insert(&test.session, TEST_STUDENT_NUMBER)
        .await
        .unwrap();

    let result = get_feedback(State(test_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let dto: FeedbackPageDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.student_number, TEST_STUDENT_NUMBER);

    Ok(())
}
