use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A single query-string-renderable value
///
/// Numbers keep their JSON form: `u64` IDs stay exact and `1.0` stays `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Runtime value of a request field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl ParamValue {
    /// Items of a list value, or `None` for scalars
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            ParamValue::List(items) => Some(items.as_slice()),
            ParamValue::Scalar(_) => None,
        }
    }

    /// Stringified items; a scalar counts as a one-item sequence
    pub fn items(&self) -> Vec<String> {
        match self {
            ParamValue::Scalar(s) => vec![s.to_string()],
            ParamValue::List(items) => items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(s) => fmt::Display::fmt(s, f),
            ParamValue::List(_) => f.write_str(&self.items().join(",")),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty, $v:ident => $to_scalar:expr);* $(;)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from($v: $ty) -> Self {
                    $to_scalar
                }
            }

            impl From<$ty> for ParamValue {
                fn from(v: $ty) -> Self {
                    ParamValue::Scalar(Scalar::from(v))
                }
            }

            impl From<Vec<$ty>> for ParamValue {
                fn from(items: Vec<$ty>) -> Self {
                    ParamValue::List(items.into_iter().map(Scalar::from).collect())
                }
            }

            impl<const N: usize> From<[$ty; N]> for ParamValue {
                fn from(items: [$ty; N]) -> Self {
                    ParamValue::List(items.into_iter().map(Scalar::from).collect())
                }
            }
        )*
    };
}

// Non-finite floats have no JSON number form
fn float_scalar(v: f64) -> Scalar {
    Number::from_f64(v)
        .map(Scalar::Number)
        .unwrap_or_else(|| Scalar::Text(v.to_string()))
}

value_from! {
    bool, v => Scalar::Bool(v);
    i32, v => Scalar::Number(v.into());
    i64, v => Scalar::Number(v.into());
    u32, v => Scalar::Number(v.into());
    u64, v => Scalar::Number(v.into());
    usize, v => Scalar::Number(v.into());
    f64, v => float_scalar(v);
    String, v => Scalar::Text(v);
    &str, v => Scalar::Text(v.to_string());
}

impl From<Scalar> for ParamValue {
    fn from(v: Scalar) -> Self {
        ParamValue::Scalar(v)
    }
}

impl From<Vec<Scalar>> for ParamValue {
    fn from(items: Vec<Scalar>) -> Self {
        ParamValue::List(items)
    }
}

impl From<&[Scalar]> for ParamValue {
    fn from(items: &[Scalar]) -> Self {
        ParamValue::List(items.to_vec())
    }
}
