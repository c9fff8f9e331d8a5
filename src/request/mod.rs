mod builder;

#[cfg(test)]
mod tests;

pub use builder::RequestBuilder;

use crate::error::{QueryError, Result};
use crate::param::{ParamSpec, ParamValue, RenderedPair};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use url::form_urlencoded;

/// One logical request: base URL, declared parameters and field values
///
/// Cloning copies the field map, so clones never share mutable state.
/// The declarations themselves are immutable and shared.
#[derive(Debug, Clone)]
pub struct RequestModel {
    base_url: String,
    specs: Arc<[ParamSpec]>,
    fields: HashMap<String, ParamValue>,
}

impl RequestModel {
    /// Create a model, validating that every field names a declared parameter
    pub fn new(
        base_url: impl Into<String>,
        specs: Vec<ParamSpec>,
        fields: impl IntoIterator<Item = (String, ParamValue)>,
    ) -> Result<Self> {
        if let Some(name) = first_duplicate(&specs) {
            return Err(QueryError::DuplicateParameter(name.to_string()));
        }

        let mut model = Self {
            base_url: base_url.into(),
            specs: specs.into(),
            fields: HashMap::new(),
        };

        for (name, value) in fields {
            model.set_field(name, value)?;
        }

        Ok(model)
    }

    pub fn builder(base_url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(base_url)
    }

    /// Set a field value; undeclared names leave the model untouched
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Result<()> {
        let name = name.into();
        if !self.has_param(&name) {
            return Err(QueryError::UnknownParameter(name));
        }
        self.fields.insert(name, value.into());
        Ok(())
    }

    /// Overwrite a field already known to be declared
    pub(crate) fn replace_field(&mut self, name: &str, value: ParamValue) {
        debug_assert!(self.has_param(name));
        self.fields.insert(name.to_string(), value);
    }

    /// Remove a field value, returning the previous one
    pub fn clear_field(&mut self, name: &str) -> Result<Option<ParamValue>> {
        if !self.has_param(name) {
            return Err(QueryError::UnknownParameter(name.to_string()));
        }
        Ok(self.fields.remove(name))
    }

    pub fn field(&self, name: &str) -> Option<&ParamValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &HashMap<String, ParamValue> {
        &self.fields
    }

    pub fn specs(&self) -> &[ParamSpec] {
        &self.specs
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.specs.iter().any(|spec| spec.name == name)
    }

    /// Render every declared parameter, in declaration order
    pub fn pairs(&self) -> Result<Vec<RenderedPair>> {
        let mut pairs = Vec::new();
        for spec in self.specs.iter() {
            pairs.extend(spec.render(self.fields.get(&spec.name))?);
        }
        Ok(pairs)
    }

    /// Encoded query string without the leading `?`; empty when nothing renders
    pub fn query_string(&self) -> Result<String> {
        let encoded: Vec<String> = self
            .pairs()?
            .iter()
            .map(|pair| {
                let value: String = form_urlencoded::byte_serialize(pair.value.as_bytes()).collect();
                format!("{}={}", pair.key, value)
            })
            .collect();

        Ok(encoded.join("&"))
    }

    /// Full request URL
    pub fn url(&self) -> Result<String> {
        let query = self.query_string()?;
        if query.is_empty() {
            Ok(self.base_url.clone())
        } else {
            Ok(format!("{}?{}", self.base_url, query))
        }
    }
}

fn first_duplicate(specs: &[ParamSpec]) -> Option<&str> {
    let mut seen = HashSet::new();
    specs
        .iter()
        .map(|spec| spec.name.as_str())
        .find(|name| !seen.insert(*name))
}
