//! Division behind a simulated remote call.

use thiserror::Error;

use crate::config::LatencyConfig;
use crate::numeric::DivisionByZeroError;

/// Failure reported by the simulated remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("BOOM!")]
pub struct RemoteCallError;

/// Divides on a pretend remote service.
///
/// Answers after `config.remote_division`.
///
/// # Errors
///
/// Returns [`RemoteCallError`] when `divisor` is zero.
#[allow(clippy::float_cmp)]
pub async fn remote_divide(
    dividend: f64,
    divisor: f64,
    config: &LatencyConfig,
) -> Result<f64, RemoteCallError> {
    tracing::debug!(dividend, divisor, latency = ?config.remote_division, "remote division called");
    tokio::time::sleep(config.remote_division).await;

    if divisor == 0.0 {
        tracing::debug!(dividend, "remote division failed");
        return Err(RemoteCallError);
    }

    Ok(dividend / divisor)
}

/// [`remote_divide`] with its failures mapped to [`DivisionByZeroError`].
///
/// # Errors
///
/// Returns [`DivisionByZeroError`] whenever the remote call fails.
///
/// # Examples
///
/// ```rust
/// use fp_training::config::LatencyConfig;
/// use fp_training::effect::async_safe_divide;
/// use fp_training::numeric::DivisionByZeroError;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let config = LatencyConfig::immediate();
/// assert_eq!(async_safe_divide(25.0, 5.0, &config).await, Ok(5.0));
/// assert_eq!(async_safe_divide(25.0, 0.0, &config).await, Err(DivisionByZeroError));
/// # });
/// ```
pub async fn async_safe_divide(
    dividend: f64,
    divisor: f64,
    config: &LatencyConfig,
) -> Result<f64, DivisionByZeroError> {
    remote_divide(dividend, divisor, config)
        .await
        .map_err(|error| {
            tracing::trace!(%error, "remote failure mapped to division by zero");
            DivisionByZeroError
        })
}

static_assertions::assert_impl_all!(RemoteCallError: Send, Sync, std::error::Error);
