//! HTTP transport abstraction and timed GET measurement

use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// HTTP transport trait for abstraction and testing
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one GET request and return the HTTP status code.
    ///
    /// Transport-level failures (DNS, refused connection, timeout) are
    /// errors; non-2xx statuses are not.
    async fn get(&self, url: &str) -> Result<u16>;
}

/// Production transport backed by reqwest
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<u16> {
        let response = self.client.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}

/// Outcome of one timed HTTP trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HttpFetch {
    /// Wall-clock seconds spent in the GET call only
    pub seconds: f64,
    /// HTTP status code received
    pub status: u16,
}

impl HttpFetch {
    /// Whether the response status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Time one GET against `url`.
///
/// The timer wraps the transport call only; a non-2xx status still yields a
/// duration, while a transport error propagates because no meaningful timing
/// exists for it.
pub async fn timed_get(transport: &dyn HttpTransport, url: &str) -> Result<HttpFetch> {
    let started = Instant::now();
    let status = transport.get(url).await?;
    let seconds = started.elapsed().as_secs_f64();

    Ok(HttpFetch { seconds, status })
}
