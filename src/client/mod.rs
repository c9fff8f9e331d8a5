mod transport;


pub use transport::{ReqwestTransport, Transport, TransportResponse};

use crate::error::Result;
use crate::request::RequestModel;
use crate::response::ResponseFormat;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Pause before each call so the remote service is not overwhelmed
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(5);

/// Per-request timeout of the default transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Calls a web service for request models and extracts the interesting part
/// of each response.
///
/// Calls are sequential; no retries are attempted.
pub struct WebServiceClient<T: Transport = ReqwestTransport> {
    transport: T,
    format: ResponseFormat,
    walk_keys: Vec<String>,
    pause: Duration,
}

impl WebServiceClient<ReqwestTransport> {
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(ReqwestTransport::new()?))
    }
}

impl<T: Transport> WebServiceClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            format: ResponseFormat::default(),
            walk_keys: Vec::new(),
            pause: DEFAULT_PAUSE,
        }
    }

    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Keys followed into every parsed response
    pub fn walk_keys(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.walk_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Pause before each call; zero disables it
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch one request and return the walked response value
    pub fn get(&self, model: &RequestModel) -> Result<Value> {
        let url = model.url()?;

        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }

        debug!(url = %url, "Going to GET");
        let response = transport::check_status(self.transport.get(&url)?)?;
        debug!(status = response.status, bytes = response.body.len(), "Received response");

        self.format.process(&response.body, &self.walk_keys)
    }

    /// Fetch each batch in turn, lazily
    pub fn get_batches<'c, I>(&'c self, batches: I) -> impl Iterator<Item = Result<Value>> + 'c
    where
        I: IntoIterator<Item = RequestModel>,
        I::IntoIter: 'c,
    {
        batches.into_iter().enumerate().map(move |(index, batch)| {
            info!(batch = index, "Fetching batch");
            self.get(&batch)
        })
    }
}
