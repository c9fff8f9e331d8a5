mod service;


pub use service::{BatchConfig, ParamConfig, ServiceConfig};
