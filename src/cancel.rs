//! Cancellation of in-flight operations.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::ShapeShiftError;

/// A cloneable cancellation token.
///
/// The client races every transport call against the token and checks it
/// between the per-pair requests of an aggregate operation. Once cancelled,
/// operations fail with [`ShapeShiftError::Cancelled`]. A token cannot be reset.
///
/// # Example
///
/// ```rust
/// use shapeshift_api_client::Cancellation;
///
/// let token = Cancellation::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct Cancellation {
    state: Arc<watch::Sender<bool>>,
}

impl Cancellation {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    /// Cancel every operation observing this token.
    pub fn cancel(&self) {
        self.state.send_replace(true);
    }

    /// Check if the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Fail with [`ShapeShiftError::Cancelled`] if the token has been cancelled.
    pub fn check(&self) -> Result<(), ShapeShiftError> {
        if self.is_cancelled() {
            Err(ShapeShiftError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Wait until the token is cancelled.
    pub async fn cancelled(&self) {
        let mut receiver = self.state.subscribe();
        // The sender lives as long as `self`, so this only returns once cancelled.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }

    /// Run `operation`, aborting it if the token is cancelled first.
    pub async fn guard<T, F>(&self, operation: F) -> Result<T, ShapeShiftError>
    where
        F: Future<Output = Result<T, ShapeShiftError>>,
    {
        self.check()?;
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(ShapeShiftError::Cancelled),
            result = operation => result,
        }
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_check() {
        let token = Cancellation::new();
        assert!(token.check().is_ok());
        token.cancel();
        assert!(matches!(token.check(), Err(ShapeShiftError::Cancelled)));
    }

    #[test]
    fn test_guard_passes_result_through() {
        let token = Cancellation::new();
        let result = tokio_test::block_on(token.guard(async { Ok::<_, ShapeShiftError>(7) }));
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_guard_aborts_pending_operation() {
        let token = Cancellation::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = token
            .guard(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<_, ShapeShiftError>(())
            })
            .await;
        assert!(matches!(result, Err(ShapeShiftError::Cancelled)));
    }

    #[tokio::test]
    async fn test_guard_rejects_when_already_cancelled() {
        let token = Cancellation::new();
        token.cancel();
        let result = token.guard(async { Ok::<_, ShapeShiftError>(1) }).await;
        assert!(matches!(result, Err(ShapeShiftError::Cancelled)));
    }
}
