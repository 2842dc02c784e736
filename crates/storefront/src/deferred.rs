//! Delayed background work with a completion value.
//!
//! Mocked remote calls (sign-in, order placement) are modelled as a
//! [`Deferred`]: a closure that runs on the tokio runtime once a delay has
//! elapsed. The work starts as soon as the `Deferred` is created, whether or
//! not anyone awaits it, and cannot be cancelled.
//!
//! ```rust,ignore
//! let order_number = Deferred::after(Duration::from_millis(1500), || 42)
//!     .then(|n| n + 1)
//!     .await;
//! ```

use std::future::{Future, IntoFuture};
use std::panic;
use std::pin::Pin;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A value that becomes available after a delay.
#[derive(Debug)]
pub struct Deferred<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Run `work` once `delay` has elapsed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn after<F>(delay: Duration, work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work()
        });
        Self { handle }
    }

    /// Run `callback` with the value as soon as it is ready.
    pub fn then<U, G>(self, callback: G) -> Deferred<U>
    where
        U: Send + 'static,
        G: FnOnce(T) -> U + Send + 'static,
    {
        let handle = tokio::spawn(async move { callback(self.await) });
        Deferred { handle }
    }

    /// Whether the value has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T: Send + 'static> IntoFuture for Deferred<T> {
    type Output = T;
    type IntoFuture = Pin<Box<dyn Future<Output = T> + Send>>;

    /// # Panics
    ///
    /// Re-raises a panic from the deferred work. Panics if the runtime shut
    /// down before the work ran.
    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            match self.handle.await {
                Ok(value) => value,
                Err(e) => match e.try_into_panic() {
                    Ok(payload) => panic::resume_unwind(payload),
                    Err(e) => panic!("deferred work did not run: {e}"),
                },
            }
        })
    }
}
