//! Atomically replaced state shared by every refreshable entity.
//!
//! A [`SnapshotCell`] holds one `Copy` value behind a lock. Readers always see
//! a whole value; a refresh swaps it in one assignment or not at all.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Lifecycle of a refreshable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshState {
    /// Holds a snapshot and no refresh is running.
    Fresh,
    /// At least one refresh is awaiting the transport.
    Refreshing,
}

#[derive(Debug)]
pub(crate) struct SnapshotCell<T: Copy> {
    current: RwLock<T>,
    in_flight: AtomicUsize,
}

impl<T: Copy> SnapshotCell<T> {
    pub(crate) fn new(initial: T) -> Self {
        Self {
            current: RwLock::new(initial),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) fn get(&self) -> T {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn replace(&self, value: T) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = value;
    }

    pub(crate) fn state(&self) -> RefreshState {
        if self.in_flight.load(Ordering::Acquire) > 0 {
            RefreshState::Refreshing
        } else {
            RefreshState::Fresh
        }
    }

    /// Runs `fetch` and stores its value on success.
    ///
    /// The cell reports [`RefreshState::Refreshing`] while the fetch is pending,
    /// including when the future is dropped midway. A failed fetch leaves the
    /// held value untouched.
    pub(crate) async fn refresh_with<F>(&self, fetch: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let _guard = InFlight::enter(&self.in_flight);
        let value = fetch.await?;
        self.replace(value);
        Ok(value)
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use apininjas_market_data::{Endpoint, TransportError};
    use tokio::sync::oneshot;

    #[test]
    fn test_replace_and_get() {
        let cell = SnapshotCell::new((1.0_f64, 10_i64));
        cell.replace((2.0, 20));
        assert_eq!(cell.get(), (2.0, 20));
        assert_eq!(cell.state(), RefreshState::Fresh);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_value() {
        let cell = SnapshotCell::new(5_i64);
        let result = cell
            .refresh_with(async {
                Err::<i64, _>(Error::Transport(TransportError::Timeout {
                    endpoint: Endpoint::Gold,
                }))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(cell.get(), 5);
        assert_eq!(cell.state(), RefreshState::Fresh);
    }

    #[tokio::test]
    async fn test_state_is_refreshing_while_pending() {
        let cell = SnapshotCell::new(1_i64);
        let (tx, rx) = oneshot::channel::<i64>();

        let refresh =
            cell.refresh_with(async move { Ok::<_, Error>(rx.await.unwrap_or_default()) });
        tokio::pin!(refresh);

        // poll once so the guard is entered
        assert!(futures::poll!(refresh.as_mut()).is_pending());
        assert_eq!(cell.state(), RefreshState::Refreshing);
        assert_eq!(cell.get(), 1);

        tx.send(7).unwrap();
        assert_eq!(refresh.await.unwrap(), 7);
        assert_eq!(cell.get(), 7);
        assert_eq!(cell.state(), RefreshState::Fresh);
    }
}
