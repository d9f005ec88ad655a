//! Running one asynchronous step over many inputs, in parallel or in sequence.
//!
//! The strategies differ only in when each step starts:
//!
//! - [`Traversal::Parallel`] starts every step before any of them completes.
//!   Steps that read shared state all observe its value from before the
//!   traversal.
//! - [`Traversal::Sequential`] starts step `i + 1` only once step `i` has
//!   completed, so each step observes the effects of the previous ones.
//!
//! Results are always returned in input order.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use fp_training::effect::{traverse, SharedCounter, Traversal};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let parallel = SharedCounter::new(Duration::from_millis(1));
//! let sequential = SharedCounter::new(Duration::from_millis(1));
//!
//! assert_eq!(traverse(Traversal::Parallel, [1, 1, 1], |n| parallel.add(n)).await, vec![1, 1, 1]);
//! assert_eq!(traverse(Traversal::Sequential, [1, 1, 1], |n| sequential.add(n)).await, vec![1, 2, 3]);
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use parking_lot::Mutex;

use crate::config::LatencyConfig;

/// A number kept in a simulated slow store.
///
/// Clones share the same store.
#[derive(Debug, Clone)]
pub struct SharedCounter {
    value: Arc<Mutex<i64>>,
    latency: Duration,
}

impl SharedCounter {
    /// A counter starting at zero whose writes land after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self {
            value: Arc::new(Mutex::new(0)),
            latency,
        }
    }

    /// A counter using [`LatencyConfig::simulated_store`].
    pub fn from_config(config: &LatencyConfig) -> Self {
        Self::new(config.simulated_store)
    }

    /// The value currently stored.
    pub fn value(&self) -> i64 {
        *self.value.lock()
    }

    /// Reads the stored value, waits, then stores and returns `read + to_add`.
    ///
    /// The read and the write are separate, so concurrent calls may overwrite
    /// each other. Every call yields once after reading, even with a zero
    /// latency, so calls started together all read before any of them writes.
    pub async fn add(&self, to_add: i64) -> i64 {
        let read = *self.value.lock();
        tokio::task::yield_now().await;
        tokio::time::sleep(self.latency).await;

        let written = read.saturating_add(to_add);
        *self.value.lock() = written;
        tracing::trace!(read, to_add, written, "shared counter written");
        written
    }
}

/// How a traversal schedules its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Every step starts at once.
    Parallel,
    /// One step at a time, in input order.
    Sequential,
}

impl fmt::Display for Traversal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parallel => formatter.write_str("parallel"),
            Self::Sequential => formatter.write_str("sequential"),
        }
    }
}

/// Applies `step` to every item with the given strategy.
pub async fn traverse<I, F, Fut>(strategy: Traversal, items: I, step: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    match strategy {
        Traversal::Parallel => traverse_parallel(items, step).await,
        Traversal::Sequential => traverse_sequential(items, step).await,
    }
}

/// Starts every step, then waits for all of them.
pub async fn traverse_parallel<I, F, Fut>(items: I, step: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    let steps: Vec<Fut> = items.into_iter().map(step).collect();
    tracing::debug!(strategy = %Traversal::Parallel, steps = steps.len(), "traversal started");

    let results = join_all(steps).await;
    tracing::debug!(strategy = %Traversal::Parallel, "traversal finished");
    results
}

/// Awaits each step before starting the next.
pub async fn traverse_sequential<I, F, Fut>(items: I, mut step: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    tracing::debug!(strategy = %Traversal::Sequential, "traversal started");

    let mut results = Vec::new();
    for item in items {
        results.push(step(item).await);
    }

    tracing::debug!(strategy = %Traversal::Sequential, steps = results.len(), "traversal finished");
    results
}

/// Sequential traversal of a fallible step, stopping at the first error.
///
/// Steps after the failing one are never started.
///
/// # Errors
///
/// Returns the first error produced by `step`.
pub async fn try_traverse_sequential<I, F, Fut, T, E>(items: I, mut step: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut results = Vec::new();
    for item in items {
        results.push(step(item).await?);
    }
    Ok(results)
}

static_assertions::assert_impl_all!(SharedCounter: Send, Sync, Clone);
