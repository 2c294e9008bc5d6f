//! Request execution: sending routes, retrying resets, classifying failures.

use std::error::Error as StdError;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::route::{BaseUrls, Route};

/// Header carrying the client id on requests that have no bearer token.
const CLIENT_ID_HEADER: &str = "X-MAL-CLIENT-ID";

/// OS error codes for "connection reset by peer" (BSD/macOS and Windows).
const CONNECTION_RESET_CODES: [i32; 2] = [54, 10054];

/// When and how long to wait before re-sending a request.
///
/// Only connection resets are retried. Every other transport failure and
/// every HTTP status is reported on the first occurrence.
///
/// The default `reset_codes` are 54 (BSD/macOS `ECONNRESET`) and 10054
/// (Windows `WSAECONNRESET`). Linux reports a reset as 104, which is not in
/// the default set, so on Linux hosts nothing is retried unless it is added:
///
/// ```
/// use malkit::RetryPolicy;
///
/// let mut policy = RetryPolicy::default();
/// policy.reset_codes.push(104);
/// assert!(policy.should_retry(&std::io::Error::from_raw_os_error(104)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay after the first failed attempt.
    pub initial_backoff: Duration,
    /// Added to the delay for each subsequent attempt.
    pub backoff_step: Duration,
    /// Raw OS error codes that count as a connection reset.
    pub reset_codes: Vec<i32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_secs(1),
            backoff_step: Duration::from_secs(2),
            reset_codes: CONNECTION_RESET_CODES.to_vec(),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// The delay to wait after failed attempt `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.initial_backoff + self.backoff_step * attempt
    }

    /// The OS error code of a connection reset somewhere in `err`'s source chain.
    pub fn reset_code(&self, err: &(dyn StdError + 'static)) -> Option<i32> {
        let mut current = Some(err);
        while let Some(e) = current {
            if let Some(code) = e
                .downcast_ref::<std::io::Error>()
                .and_then(|io| io.raw_os_error())
                .filter(|code| self.reset_codes.contains(code))
            {
                return Some(code);
            }
            current = e.source();
        }
        None
    }

    /// Whether `err` is a connection reset worth retrying.
    pub fn should_retry(&self, err: &(dyn StdError + 'static)) -> bool {
        self.reset_code(err).is_some()
    }
}

/// Run `op` until it succeeds, fails with something other than a connection
/// reset, or exhausts the policy's attempts.
///
/// The error from the final attempt is returned unchanged.
pub async fn retry_on_reset<F, Fut, T, E>(policy: &RetryPolicy, mut op: F) -> std::result::Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: StdError + 'static,
{
    let mut attempt = 0;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                let code = policy.reset_code(&err);
                if code.is_none() || attempt + 1 >= policy.max_attempts {
                    return Err(err);
                }

                let delay = policy.backoff(attempt);
                warn!(
                    attempt = attempt + 1,
                    os_error = code,
                    delay_ms = delay.as_millis() as u64,
                    "Connection reset by peer, retrying"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Owns the HTTP connection pool and turns routes into responses.
#[derive(Debug)]
pub(crate) struct Executor {
    http: Client,
    bases: BaseUrls,
    client_id: HeaderValue,
    retry: RetryPolicy,
}

impl Executor {
    pub(crate) fn new(
        http: Client,
        bases: BaseUrls,
        client_id: &str,
        retry: RetryPolicy,
    ) -> Result<Self> {
        let client_id = HeaderValue::from_str(client_id)
            .map_err(|_| Error::InvalidHeader("client id".to_string()))?;

        Ok(Self {
            http,
            bases,
            client_id,
            retry,
        })
    }

    pub(crate) fn bases(&self) -> &BaseUrls {
        &self.bases
    }

    /// Send a route and return the parsed JSON document.
    ///
    /// An empty 2xx body is returned as `Value::Null`.
    pub(crate) async fn execute(&self, route: &Route) -> Result<Value> {
        let url = route.url(&self.bases)?;
        let mut headers = route.headers()?;
        if !route.has_bearer() {
            headers.insert(CLIENT_ID_HEADER, self.client_id.clone());
        }
        let body = route.form_body();

        let (status, bytes) = retry_on_reset(&self.retry, |attempt| {
            debug!(
                method = %route.method(),
                url = %url,
                attempt = attempt + 1,
                "Making API request"
            );

            let mut request = self
                .http
                .request(route.method().clone(), url.clone())
                .headers(headers.clone());
            if let Some(body) = &body {
                request = request.body(body.clone());
            }

            async move {
                let response = request.send().await?;
                let status = response.status();
                let bytes = response.bytes().await?;
                Ok::<_, reqwest::Error>((status, bytes))
            }
        })
        .await?;

        if !status.is_success() {
            let err = Error::from_response(status.as_u16(), &bytes);
            debug!(
                method = %route.method(),
                path = %route.path(),
                status = status.as_u16(),
                error = %err,
                "Request failed"
            );
            return Err(err);
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a route and deserialize the response into `T`.
    pub(crate) async fn execute_as<T: DeserializeOwned>(&self, route: &Route) -> Result<T> {
        let value = self.execute(route).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::atomic::{AtomicU32, Ordering};

    use tokio::time::Instant;

    use super::*;

    /// An error that wraps an io::Error the way hyper/reqwest do.
    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapped: {}", self.0)
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    fn reset(code: i32) -> Wrapped {
        Wrapped(io::Error::from_raw_os_error(code))
    }

    #[test]
    fn test_backoff_schedule() {
        let policy = RetryPolicy::default();
        let delays: Vec<u64> = (0..4).map(|n| policy.backoff(n).as_secs()).collect();
        assert_eq!(delays, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_should_retry_only_reset_codes() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(&reset(54)));
        assert!(policy.should_retry(&reset(10054)));
        assert!(policy.should_retry(&io::Error::from_raw_os_error(54)));

        // ECONNREFUSED, ETIMEDOUT and friends are not retried
        assert!(!policy.should_retry(&reset(61)));
        assert!(!policy.should_retry(&reset(111)));
        assert!(!policy.should_retry(&reset(110)));
        assert!(!policy.should_retry(&io::Error::new(
            io::ErrorKind::ConnectionReset,
            "no os code"
        )));
    }

    #[test]
    fn test_default_codes_exclude_linux_reset() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.reset_codes, vec![54, 10054]);
        assert!(!policy.should_retry(&reset(104)));

        let policy = RetryPolicy {
            reset_codes: vec![104],
            ..RetryPolicy::default()
        };
        assert!(policy.should_retry(&reset(104)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_exhaust_after_five_attempts() {
        let policy = RetryPolicy::default();
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let result: std::result::Result<(), Wrapped> = retry_on_reset(&policy, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(reset(10054)) }
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.0.raw_os_error(), Some(10054));
        assert_eq!(calls.load(Ordering::SeqCst), 5);
        // 1 + 3 + 5 + 7
        assert_eq!(start.elapsed(), Duration::from_secs(16));
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_errors_are_not_retried() {
        let policy = RetryPolicy::default();
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let result: std::result::Result<(), Wrapped> = retry_on_reset(&policy, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(reset(111)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_reset() {
        let policy = RetryPolicy::default();
        let start = Instant::now();

        let result: std::result::Result<u32, Wrapped> = retry_on_reset(&policy, |attempt| async move {
            if attempt < 2 { Err(reset(54)) } else { Ok(attempt) }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
        // 1 + 3 seconds of backoff before the third attempt
        assert_eq!(start.elapsed(), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_policy_none_sends_once() {
        let calls = AtomicU32::new(0);
        let result: std::result::Result<(), Wrapped> = retry_on_reset(&RetryPolicy::none(), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(reset(54)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
