//! Call scoping: cancellation plus an optional deadline.
//!
//! Every remote round-trip runs inside a [`CallContext`]. A caller hands one
//! in (or uses [`CallContext::background`]); the adapter narrows it with its
//! own timeout through [`CallContext::scoped`] and races the client future
//! against both limits with [`CallContext::run`].

use crate::client::ClientError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Cancellation token and deadline bounding one remote call.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// Context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Context expiring `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().tighten_timeout(timeout)
    }

    /// Context expiring at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Context cancelled together with `token`.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: token,
            deadline: None,
        }
    }

    /// Tighten the deadline to at most `timeout` from now.
    ///
    /// A timeout too large to represent as an instant leaves the deadline
    /// unchanged.
    pub fn tighten_timeout(mut self, timeout: Duration) -> Self {
        let Some(candidate) = Instant::now().checked_add(timeout) else {
            return self;
        };
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(candidate),
            None => candidate,
        });
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, `None` when unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Derive a child context bounded by `timeout` as well as this one.
    ///
    /// The returned guard cancels the child when dropped, so the scope is
    /// released on every exit path of the caller.
    pub fn scoped(&self, timeout: Duration) -> (CallContext, DropGuard) {
        let child = CallContext {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
        .tighten_timeout(timeout);
        let guard = child.cancel.clone().drop_guard();
        (child, guard)
    }

    /// Fail fast when the context is already spent.
    pub fn check(&self) -> Result<(), ClientError> {
        if self.cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        if matches!(self.deadline, Some(d) if d <= Instant::now()) {
            return Err(ClientError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Drive `fut` until it completes, the token fires, or the deadline
    /// passes, whichever comes first.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        let deadline = async {
            match self.deadline {
                Some(d) => tokio::time::sleep_until(d).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ClientError::Cancelled),
            _ = deadline => Err(ClientError::DeadlineExceeded),
            res = fut => res,
        }
    }
}
