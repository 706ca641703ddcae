//! HTTP send helper with a single bounded retry.
//!
//! Remote geocoders should call [`send`] instead of
//! `reqwest::RequestBuilder::send()` directly. A request that fails to
//! connect is retried once after [`RETRY_BACKOFF`]. Timeouts and HTTP
//! error statuses are not retried: the resolver moves on to the next
//! stage instead.

use std::time::Duration;

use crate::GeocodeError;

/// Maximum number of retry attempts for connection failures.
const MAX_RETRIES: u32 = 1;

/// Wait before the retry.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Sends the request built by `build_request` and checks its status.
///
/// The closure is called on each attempt since builders are consumed by
/// `.send()`.
///
/// # Errors
///
/// * [`GeocodeError::Http`] if the request fails after the retry or
///   times out
/// * [`GeocodeError::RateLimited`] on HTTP 429
/// * [`GeocodeError::Status`] on any other non-2xx status
pub async fn send<F>(build_request: F) -> Result<reqwest::Response, GeocodeError>
where
    F: Fn() -> reqwest::RequestBuilder + Send + Sync,
{
    let mut attempt = 0;

    loop {
        match build_request().send().await {
            Err(e) if e.is_connect() && attempt < MAX_RETRIES => {
                attempt += 1;
                log::warn!(
                    "  connection failed ({e}), retry {attempt}/{MAX_RETRIES} in {RETRY_BACKOFF:?}..."
                );
                tokio::time::sleep(RETRY_BACKOFF).await;
            }
            Err(e) => return Err(GeocodeError::Http(e)),
            Ok(response) => return check_status(response),
        }
    }
}

/// Maps non-success statuses to errors.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GeocodeError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }
    if !status.is_success() {
        return Err(GeocodeError::Status {
            status: status.as_u16(),
        });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[tokio::test]
    async fn connection_refused_is_retried_once_then_fails() {
        let client = reqwest::Client::new();
        let started = Instant::now();

        let result = send(|| client.get("http://127.0.0.1:9/reverse")).await;

        assert!(matches!(result, Err(GeocodeError::Http(ref e)) if e.is_connect()));
        assert!(started.elapsed() >= RETRY_BACKOFF);
    }
}
