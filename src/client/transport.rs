use crate::error::{QueryError, Result};
use std::time::Duration;

/// Raw result of a GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests for fully built URLs
///
/// Swappable so request handling can be exercised without a network.
pub trait Transport {
    fn get(&self, url: &str) -> Result<TransportResponse>;
}

/// Blocking reqwest transport
pub struct ReqwestTransport {
    http: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(super::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self.http.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(TransportResponse { status, body })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<TransportResponse> {
        (**self).get(url)
    }
}

/// Turn a non-success response into `ServerError`
pub(crate) fn check_status(response: TransportResponse) -> Result<TransportResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(QueryError::ServerError {
            status: response.status,
            body: response.body,
        })
    }
}
