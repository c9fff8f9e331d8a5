// Public API exports
pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod param;
pub mod request;
pub mod response;

// Re-export main types for convenience
pub use error::{QueryError, Result};

pub use param::{MultiValueMode, ParamKind, ParamSpec, ParamValue, RenderedPair, Scalar};

pub use request::{RequestBuilder, RequestModel};

pub use batch::{BatchSplitter, Batches, DEFAULT_BATCH_SIZE};

pub use response::{ResponseFormat, walk_keys};

pub use client::{ReqwestTransport, Transport, TransportResponse, WebServiceClient};

pub use config::{BatchConfig, ParamConfig, ServiceConfig};
