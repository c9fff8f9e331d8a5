use super::{MultiValueMode, ParamKind, ParamSpec, ParamValue};
use crate::error::{QueryError, Result};

/// One `key=value` fragment before encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPair {
    pub key: String,
    pub value: String,
}

impl RenderedPair {
    fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

impl ParamSpec {
    /// Render a runtime value into zero or more pairs
    ///
    /// Pure: the same spec and value always produce the same pairs.
    /// Only required Simple/Multi parameters with no value fail.
    pub fn render(&self, value: Option<&ParamValue>) -> Result<Vec<RenderedPair>> {
        let pairs = match &self.kind {
            ParamKind::Constant(constant) => vec![RenderedPair::new(&self.name, constant.as_str())],
            ParamKind::Simple => match self.present(value)? {
                Some(value) => vec![RenderedPair::new(&self.name, value.to_string())],
                None => Vec::new(),
            },
            ParamKind::Multi(mode) => match self.present(value)? {
                Some(value) => self.render_multi(mode, value),
                None => Vec::new(),
            },
        };

        Ok(pairs)
    }

    fn present<'a>(&self, value: Option<&'a ParamValue>) -> Result<Option<&'a ParamValue>> {
        match value {
            None if self.required => Err(QueryError::MissingRequiredParameter(self.name.clone())),
            other => Ok(other),
        }
    }

    fn render_multi(&self, mode: &MultiValueMode, value: &ParamValue) -> Vec<RenderedPair> {
        match mode {
            MultiValueMode::Delimited(delimiter) => {
                vec![RenderedPair::new(&self.name, value.items().join(delimiter.as_str()))]
            }
            MultiValueMode::Repeated | MultiValueMode::None => value
                .items()
                .into_iter()
                .map(|item| RenderedPair::new(&self.name, item))
                .collect(),
        }
    }
}
