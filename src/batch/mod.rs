mod splitter;


pub use splitter::{BatchSplitter, Batches};

/// Batch size used when a service definition does not set one
pub const DEFAULT_BATCH_SIZE: usize = 100;
