use ory_login_client::error::{AppError, ResponseError};
use reqwest::StatusCode;

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("login flow id must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: login flow id must not be empty"
    );
}

#[test]
fn test_app_error_display_cancelled() {
    assert_eq!(AppError::Cancelled.to_string(), "request cancelled");
}

#[test]
fn test_app_error_display_deadline() {
    assert_eq!(AppError::DeadlineExceeded.to_string(), "deadline exceeded");
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api(ResponseError::new(
        StatusCode::BAD_REQUEST,
        "plain text failure".to_string(),
    ));
    let rendered = error.to_string();
    assert!(rendered.starts_with("api error: 400"));
    assert!(rendered.contains("plain text failure"));
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_source() {
    use std::error::Error;

    let io_error: AppError = std::io::Error::other("disk").into();
    assert!(io_error.source().is_some());
    assert!(AppError::Cancelled.source().is_none());
}
