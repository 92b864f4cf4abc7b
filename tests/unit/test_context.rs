use ory_login_client::application::context::Context;
use ory_login_client::error::AppError;
use std::time::Duration;
use tokio_test::block_on;
use tokio_util::sync::CancellationToken;

#[test]
fn test_external_token_cancels_context() {
    let token = CancellationToken::new();
    let ctx = Context::with_cancellation(token.clone());
    assert!(ctx.err().is_none());

    token.cancel();
    assert!(ctx.is_cancelled());
    assert!(matches!(ctx.err(), Some(AppError::Cancelled)));
}

#[test]
fn test_elapsed_deadline_reports_error() {
    let ctx = Context::with_timeout(Duration::ZERO);
    assert!(matches!(ctx.err(), Some(AppError::DeadlineExceeded)));
    assert_eq!(ctx.remaining(), Some(Duration::ZERO));

    let result = block_on(ctx.run(async { Ok::<_, AppError>("never") }));
    assert!(matches!(result, Err(AppError::DeadlineExceeded)));
}

#[test]
fn test_live_context_passes_errors_through() {
    let ctx = Context::with_timeout(Duration::from_secs(30));
    let result: Result<(), AppError> = block_on(ctx.run(async {
        Err(AppError::InvalidInput("inner".to_string()))
    }));
    assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg == "inner"));
}
