use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Form,
};
use formgate::{
    controller::auth::{login, FEEDBACK_PATH},
    model::{api::ValidationDto, form::FormSubmission, session::student::SessionStudentNumber},
    service::auth::login::STUDENT_NUMBER_MISSING,
};
use formgate_test_utils::prelude::*;

#[tokio::test]
/// Expect 307 temporary redirect to the feedback page and a session write for a
/// filled-in student number
async fn redirects_and_stores_student_number_on_valid_login() -> Result<(), TestError> {
    let test = TestSetup::new();
    let form = FormSubmission::from([("student", TEST_STUDENT_NUMBER)]);

    let result = login(test.session.clone(), Form(form)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        FEEDBACK_PATH
    );

    let stored = SessionStudentNumber::get(&test.session).await.unwrap();
    assert_eq!(stored.as_deref(), Some(TEST_STUDENT_NUMBER));

    Ok(())
}

#[tokio::test]
/// Expect 422 with the list-item message and no session write for a blank field
async fn rejects_blank_student_number() -> Result<(), TestError> {
    let test = TestSetup::new();
    let form = FormSubmission::from([("student", "")]);

    let result = login(test.session.clone(), Form(form)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let dto: ValidationDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.errors, STUDENT_NUMBER_MISSING);

    let stored = SessionStudentNumber::get(&test.session).await.unwrap();
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 422 for a whitespace-only student number; trimming happens in validation
async fn rejects_whitespace_only_student_number() -> Result<(), TestError> {
    let test = TestSetup::new();
    let form = FormSubmission::from([("student", "  ")]);

    let result = login(test.session.clone(), Form(form)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
/// Expect 422 when the form omits the student field entirely
async fn rejects_submission_without_student_field() -> Result<(), TestError> {
    let test = TestSetup::new();
    let form = FormSubmission::default();

    let result = login(test.session.clone(), Form(form)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
