//! Exponential backoff retry for external calls.

use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Milliseconds of full jitter added on top of every backoff delay.
const JITTER_CEILING_MS: u64 = 2000;

/// Retry policy with exponential backoff and full additive jitter.
///
/// The delay before retry `attempt` (zero-based) is
/// `base_delay * 2^attempt + random(0..2000ms)`. Every error is retried,
/// including deterministically non-retryable ones; classifying errors would
/// change the observable latency profile callers were tuned against, so the
/// simplification is deliberate.
///
/// Retrying is an explicit loop with a fixed attempt budget, so pathological
/// retry counts cannot grow the call stack.
///
/// # Examples
///
/// ```
/// use fresco_models::RetryPolicy;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), &'static str> {
/// let policy = RetryPolicy::new(2, Duration::from_millis(10));
/// let value = policy.run(|| async { Ok::<_, &'static str>(42) }).await?;
/// assert_eq!(value, 42);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt; total invocations = max_retries + 1
    pub max_retries: usize,
    /// Base delay doubled on each attempt
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy with an explicit retry budget and base delay.
    pub fn new(max_retries: usize, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Policy for image generation and video submission calls: five
    /// retries from a one-second base.
    pub fn generation() -> Self {
        Self::new(5, Duration::from_secs(1))
    }

    /// Policy for image customization and music calls: a single retry.
    pub fn customization() -> Self {
        Self::new(1, Duration::from_secs(1))
    }

    /// Run `operation`, retrying on any error until the budget is spent.
    ///
    /// Each failed attempt is logged with its index and the computed delay.
    /// After the final attempt the last error is returned unchanged.
    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(error) if attempt < self.max_retries => {
                    let delay = self.delay_for_attempt(attempt);
                    warn!(
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Attempt failed, retrying after backoff"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    warn!(
                        attempts = self.max_retries + 1,
                        error = %error,
                        "Giving up after final attempt"
                    );
                    return Err(error);
                }
            }
        }
    }

    /// Backoff for a zero-based attempt index: exponential base plus full
    /// jitter in `0..2000ms`.
    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let base = self.base_delay.saturating_mul(1u32 << attempt.min(31));
        let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..JITTER_CEILING_MS));
        base + jitter
    }
}
