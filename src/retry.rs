//! Bounded retry with a fixed delay.

use std::thread;
use std::time::Duration;

/// Retry an operation a bounded number of times with a fixed delay.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use venvctl::retry::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, Duration::ZERO);
/// let mut calls = 0;
/// let result: Result<u32, &str> = policy.run(
///     |attempt| {
///         calls += 1;
///         if attempt < 3 { Err("busy") } else { Ok(attempt) }
///     },
///     |_| true,
///     |_, _| {},
/// );
/// assert_eq!(result, Ok(3));
/// assert_eq!(calls, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub attempts: u32,

    /// Pause between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a policy. Zero attempts is treated as one.
    pub const fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// attempts are exhausted.
    ///
    /// `op` receives the 1-based attempt number. `on_retry` is called with
    /// the number of remaining attempts before each pause.
    pub fn run<T, E, F, R, N>(&self, mut op: F, is_retryable: R, mut on_retry: N) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
        R: Fn(&E) -> bool,
        N: FnMut(u32, &E),
    {
        let attempts = self.attempts.max(1);
        let mut attempt = 1;

        loop {
            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let remaining = attempts.saturating_sub(attempt);
                    if remaining == 0 || !is_retryable(&err) {
                        return Err(err);
                    }

                    on_retry(remaining, &err);
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                    attempt += 1;
                }
            }
        }
    }
}
