//! Last-query-wins.
//!
//! When a user picks a new range before the previous one has loaded, the older
//! query is aborted so its response can never overwrite the newer one.

use futures::future::{AbortHandle, Aborted, abortable};
use std::future::Future;
use std::sync::{Mutex, PoisonError};

/// The query was aborted because a newer one started on the same [`LatestQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("superseded by a newer query")]
pub struct Superseded;

impl From<Aborted> for Superseded {
    fn from(_: Aborted) -> Self {
        Self
    }
}

#[derive(Debug, Default)]
pub struct LatestQuery {
    in_flight: Mutex<Option<AbortHandle>>,
}

impl LatestQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `query`, aborting whichever query this handle was running before.
    ///
    /// # Errors
    ///
    /// Returns `Superseded` if another `run` starts before `query` completes.
    pub async fn run<F>(&self, query: F) -> Result<F::Output, Superseded>
    where
        F: Future,
    {
        let (query, handle) = abortable(query);

        let previous = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            tracing::debug!("Aborting previous range query");
            previous.abort();
        }

        Ok(query.await?)
    }

    /// Abort the running query, if any, without starting another.
    pub fn cancel(&self) {
        if let Some(handle) = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{pending, ready};

    #[tokio::test]
    async fn newer_query_aborts_older_one() {
        let latest = LatestQuery::new();

        let (older, newer) = tokio::join!(latest.run(pending::<u32>()), async {
            tokio::task::yield_now().await;
            latest.run(ready(2)).await
        });

        assert_eq!(older, Err(Superseded));
        assert_eq!(newer, Ok(2));
    }

    #[tokio::test]
    async fn sequential_queries_both_complete() {
        let latest = LatestQuery::new();
        assert_eq!(latest.run(ready("a")).await, Ok("a"));
        assert_eq!(latest.run(ready("b")).await, Ok("b"));
    }

    #[tokio::test]
    async fn cancel_aborts_in_flight_query() {
        let latest = LatestQuery::new();

        let (result, ()) = tokio::join!(latest.run(pending::<()>()), async {
            tokio::task::yield_now().await;
            latest.cancel();
        });

        assert_eq!(result, Err(Superseded));
    }
}
