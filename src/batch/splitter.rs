// splitter.rs - one request per slice of a list-valued field

use crate::error::{QueryError, Result};
use crate::param::{ParamValue, Scalar};
use crate::request::RequestModel;

pub struct BatchSplitter {
    pub batch_size: usize,
}

impl BatchSplitter {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Split `model` on the list held by the single field in `fields`
    ///
    /// All validation happens here, before any batch is produced. The
    /// returned iterator clones `model` lazily and never mutates it.
    pub fn split<'a>(&self, model: &'a RequestModel, fields: &[&str]) -> Result<Batches<'a>> {
        let [field] = fields else {
            return Err(QueryError::UnsupportedBatchShape(fields.len()));
        };
        if self.batch_size == 0 {
            return Err(QueryError::InvalidBatchSize);
        }
        if !model.has_param(field) {
            return Err(QueryError::UnknownParameter(field.to_string()));
        }
        let values = model
            .field(field)
            .and_then(ParamValue::as_list)
            .ok_or_else(|| QueryError::NotBatchable(field.to_string()))?;

        Ok(Batches {
            model,
            field: field.to_string(),
            values,
            batch_size: self.batch_size,
            offset: 0,
        })
    }
}

/// Lazy sequence of independent per-batch request models
pub struct Batches<'a> {
    model: &'a RequestModel,
    field: String,
    values: &'a [Scalar],
    batch_size: usize,
    offset: usize,
}

impl Iterator for Batches<'_> {
    type Item = RequestModel;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.values.len() {
            return None;
        }

        let end = (self.offset + self.batch_size).min(self.values.len());
        let slice = &self.values[self.offset..end];
        self.offset = end;

        let mut batch = self.model.clone();
        batch.replace_field(&self.field, ParamValue::from(slice));
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.values.len() - self.offset).div_ceil(self.batch_size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Batches<'_> {}
