use crate::batch::{BatchSplitter, DEFAULT_BATCH_SIZE};
use crate::client::{DEFAULT_PAUSE, DEFAULT_TIMEOUT, ReqwestTransport, WebServiceClient};
use crate::error::{QueryError, Result};
use crate::param::{MultiValueMode, ParamSpec, ParamValue, Scalar};
use crate::request::RequestModel;
use crate::response::ResponseFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// A web service described in a JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub params: Vec<ParamConfig>,
    #[serde(default)]
    pub fields: HashMap<String, ParamValue>,
    #[serde(default)]
    pub walk_keys: Vec<String>,
    #[serde(default)]
    pub format: ResponseFormat,
    pub pause_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub batch: Option<BatchConfig>,
}

/// One parameter declaration, tagged by `kind`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParamConfig {
    Simple {
        name: String,
        #[serde(default)]
        required: bool,
    },
    Constant {
        name: String,
        value: Scalar,
    },
    Multi {
        name: String,
        #[serde(default)]
        required: bool,
        delimiter: Option<String>,
        #[serde(default)]
        repeat: bool,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub field: String,
    #[serde(default = "default_batch_size")]
    pub size: usize,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl ParamConfig {
    pub fn to_spec(&self) -> Result<ParamSpec> {
        let spec = match self {
            ParamConfig::Simple { name, required } => {
                ParamSpec::simple(name.as_str()).required_if(*required)
            }
            ParamConfig::Constant { name, value } => {
                ParamSpec::constant(name.as_str(), value.to_string())
            }
            ParamConfig::Multi {
                name,
                required,
                delimiter,
                repeat,
            } => {
                let mode = match (delimiter, repeat) {
                    (Some(_), true) => {
                        return Err(QueryError::Config(format!(
                            "parameter {} sets both delimiter and repeat",
                            name
                        )));
                    }
                    (Some(d), false) => MultiValueMode::Delimited(d.clone()),
                    (None, _) => MultiValueMode::Repeated,
                };
                ParamSpec::multi(name.as_str(), mode).required_if(*required)
            }
        };

        Ok(spec)
    }
}

impl ServiceConfig {
    /// Read a service definition from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            QueryError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        if config.base_url.trim().is_empty() {
            return Err(QueryError::Config("base_url is empty".to_string()));
        }
        Ok(config)
    }

    pub fn specs(&self) -> Result<Vec<ParamSpec>> {
        self.params.iter().map(ParamConfig::to_spec).collect()
    }

    /// Request model with the configured initial fields
    pub fn request_model(&self) -> Result<RequestModel> {
        RequestModel::new(
            self.base_url.as_str(),
            self.specs()?,
            self.fields.iter().map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    pub fn pause(&self) -> Duration {
        self.pause_ms.map(Duration::from_millis).unwrap_or(DEFAULT_PAUSE)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Client over the default transport, set up for this service
    pub fn client(&self) -> Result<WebServiceClient<ReqwestTransport>> {
        let transport = ReqwestTransport::with_timeout(self.timeout())?;
        Ok(WebServiceClient::with_transport(transport)
            .format(self.format)
            .walk_keys(self.walk_keys.iter().cloned())
            .pause(self.pause()))
    }

    /// Splitter and batched field name, when the service batches
    pub fn splitter(&self) -> Option<(BatchSplitter, &str)> {
        self.batch
            .as_ref()
            .map(|batch| (BatchSplitter::new(batch.size), batch.field.as_str()))
    }
}
