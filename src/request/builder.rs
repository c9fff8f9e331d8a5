use super::RequestModel;
use crate::error::Result;
use crate::param::{ParamSpec, ParamValue};

/// Fluent construction of a [`RequestModel`]
///
/// # Example
/// ```
/// use querybatch::{ParamSpec, RequestModel};
///
/// let model = RequestModel::builder("https://example.org/search")
///     .param(ParamSpec::constant("format", "json"))
///     .param(ParamSpec::simple("q").required())
///     .field("q", "cats")
///     .build()
///     .unwrap();
///
/// assert_eq!(model.url().unwrap(), "https://example.org/search?format=json&q=cats");
/// ```
pub struct RequestBuilder {
    base_url: String,
    specs: Vec<ParamSpec>,
    fields: Vec<(String, ParamValue)>,
}

impl RequestBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            specs: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Declare the next parameter; order of calls is rendering order
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn params(mut self, specs: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Set an initial field value (validated in `build`)
    pub fn field(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<RequestModel> {
        RequestModel::new(self.base_url, self.specs, self.fields)
    }
}
