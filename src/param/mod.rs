mod render;
mod value;


pub use render::RenderedPair;
pub use value::{ParamValue, Scalar};

/// How a list value becomes query-string pairs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MultiValueMode {
    /// No explicit mode; rendered like `Repeated`
    #[default]
    None,
    /// One pair, items joined with the delimiter (e.g. `id=1,2,3`)
    Delimited(String),
    /// One pair per item (e.g. `id=1&id=2`)
    Repeated,
}

/// Rendering rule of a declared parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// Single value, rendered as-is
    Simple,
    /// Fixed literal, runtime value ignored
    Constant(String),
    /// Sequence value
    Multi(MultiValueMode),
}

/// Declaration of one query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParamSpec {
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Simple,
            required: false,
        }
    }

    pub fn constant(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Constant(value.into()),
            required: false,
        }
    }

    pub fn multi(name: impl Into<String>, mode: MultiValueMode) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Multi(mode),
            required: false,
        }
    }

    /// Multi parameter joined with `delimiter`
    pub fn delimited(name: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self::multi(name, MultiValueMode::Delimited(delimiter.into()))
    }

    /// Multi parameter rendered as repeated keys
    pub fn repeated(name: impl Into<String>) -> Self {
        Self::multi(name, MultiValueMode::Repeated)
    }

    /// Mark the parameter as required
    pub fn required(self) -> Self {
        self.required_if(true)
    }

    pub fn required_if(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}
