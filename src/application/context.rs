/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Execution context carried by every remote call
//!
//! A [`Context`] bundles a cancellation token with an optional deadline. Calls
//! made under a context are abandoned as soon as the token is cancelled or the
//! deadline passes, and return [`AppError::Cancelled`] or
//! [`AppError::DeadlineExceeded`].
//!
//! # Example
//! ```ignore
//! let ctx = Context::with_timeout(Duration::from_secs(5));
//! let flow = get_login(&client, &ctx, flow_id).await?;
//! ```

use crate::error::AppError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline carrier for remote calls
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// A context driven by an existing cancellation token
    #[must_use]
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Derives a context that is cancelled together with this one
    ///
    /// Cancelling the child does not affect the parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derives a child context with a deadline no later than `timeout` from now
    #[must_use]
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(current) if current < candidate => current,
            _ => candidate,
        };
        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// Cancels this context and every context derived from it
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns true once the context has been cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The deadline, if any
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, zero once it has passed
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Why the context is done, or `None` while it is still live
    #[must_use]
    pub fn err(&self) -> Option<AppError> {
        if self.is_cancelled() {
            return Some(AppError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(AppError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drives `fut` to completion unless the context ends first
    ///
    /// A context that is already done fails without polling `fut`. When the
    /// context ends mid-flight, `fut` is dropped, which aborts any request it owns.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(AppError::Cancelled),
            _ = deadline => Err(AppError::DeadlineExceeded),
            result = fut => result,
        }
    }
}
