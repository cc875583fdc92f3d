// Asana API HTTP client.
// Handles authentication, transient-failure retry, and response processing.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use tracing::warn;

use crate::error::{DueMapError, Result};

const ASANA_API_BASE: &str = "https://app.asana.com/api/1.0";

/// Attempts per request, including the first.
const MAX_ATTEMPTS: u32 = 3;

/// Fallback wait when a 429 response carries no Retry-After header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Asana API client with bearer authentication and bounded retry.
pub struct AsanaClient {
    client: Client,
    base_url: String,
}

impl AsanaClient {
    /// Create a new Asana client with the given personal access token.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, ASANA_API_BASE)
    }

    /// Create a client against a non-default base URL.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| DueMapError::Other(e.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(DueMapError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request with query parameters, retrying transient failures.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut attempt = 1;

        loop {
            let result = match self.client.get(&url).query(params).send().await {
                Ok(response) => check_response(response).await,
                Err(err) => Err(DueMapError::Api(err)),
            };

            match result {
                Err(err) if err.is_transient() && attempt < MAX_ATTEMPTS => {
                    let delay = retry_delay(&err, attempt);
                    warn!(%url, attempt, "transient failure ({err}), retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DueMapError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(DueMapError::NotFound(url))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            Err(DueMapError::RateLimited { retry_after_secs })
        }
        status if status.is_server_error() => Err(DueMapError::Server {
            status: status.as_u16(),
        }),
        status => Err(DueMapError::Other(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}

/// Delay before the next attempt, given the failed attempt number (1-based).
/// Exponential from 500ms, except a rate limit waits out its Retry-After.
fn retry_delay(err: &DueMapError, attempt: u32) -> Duration {
    match err {
        DueMapError::RateLimited { retry_after_secs } => Duration::from_secs(*retry_after_secs),
        _ => Duration::from_millis(500 * 2u64.pow(attempt - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let err = DueMapError::Server { status: 502 };
        assert_eq!(retry_delay(&err, 1), Duration::from_millis(500));
        assert_eq!(retry_delay(&err, 2), Duration::from_millis(1000));
        assert_eq!(retry_delay(&err, 3), Duration::from_millis(2000));
    }

    #[test]
    fn test_rate_limit_waits_out_retry_after() {
        let err = DueMapError::RateLimited {
            retry_after_secs: 17,
        };
        assert_eq!(retry_delay(&err, 1), Duration::from_secs(17));
        assert_eq!(retry_delay(&err, 2), Duration::from_secs(17));
    }
}
