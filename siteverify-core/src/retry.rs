//! Deadline-bounded retry loop.
//!
//! The budget is wall-clock time, not an attempt count: the authority's
//! interesting failures are DNS propagation races whose duration the
//! controller cannot predict. Cancellation is the deadline itself; there
//! is no separate signal.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use siteverify_provider::ProviderError;

/// 初始退避间隔（毫秒）
const INITIAL_BACKOFF_MS: u64 = 500;
/// 退避间隔上限（秒）
const MAX_BACKOFF_SECS: u64 = 30;

/// Terminal outcome of a retry loop.
#[derive(Debug)]
pub(crate) enum RetryError {
    /// The budget elapsed; carries the last error seen and the elapsed time.
    Expired {
        last_error: ProviderError,
        elapsed: Duration,
    },
    /// A non-retryable error aborted the loop immediately.
    Fatal(ProviderError),
}

/// Retry `op` until it succeeds, a non-retryable error occurs, or `budget`
/// elapses.
///
/// Backoff is exponential (500 ms doubling, capped at 30 s) and the final
/// sleep is clipped so the loop re-checks the deadline rather than
/// overshooting it. Every failed attempt is logged.
pub(crate) async fn retry_until_deadline<T, F, Fut>(
    budget: Duration,
    what: &str,
    retryable: impl Fn(&ProviderError) -> bool,
    mut op: F,
) -> Result<T, RetryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let started = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if retryable(&e) => {
                let elapsed = started.elapsed();
                if elapsed >= budget {
                    return Err(RetryError::Expired {
                        last_error: e,
                        elapsed,
                    });
                }
                let delay = backoff_delay(attempt).min(budget - elapsed);
                log::warn!(
                    "{} failed (attempt {}, {:.0?} elapsed), retrying in {:.1}s: {}",
                    what,
                    attempt + 1,
                    elapsed,
                    delay.as_secs_f32(),
                    e
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(RetryError::Fatal(e)),
        }
    }
}

/// Calculate exponential backoff delay
///
/// Backoff strategy: 500ms, 1s, 2s, 4s, ...
/// Maximum delay limit is 30 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = INITIAL_BACKOFF_MS.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(MAX_BACKOFF_SECS * 1000))
}
