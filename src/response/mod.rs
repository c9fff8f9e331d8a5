mod walk;

pub use walk::walk_keys;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body format of a web service response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
}

impl ResponseFormat {
    /// Parse raw response text into a structured value
    pub fn parse(&self, text: &str) -> Result<Value> {
        match self {
            ResponseFormat::Json => Ok(serde_json::from_str(text)?),
        }
    }

    /// Parse, then follow `keys` into the parsed structure
    pub fn process(&self, text: &str, keys: &[String]) -> Result<Value> {
        let parsed = self.parse(text)?;
        walk_keys(parsed, keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryError;
    use serde_json::json;

    #[test]
    fn test_parse_json() {
        let value = ResponseFormat::Json.parse(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = ResponseFormat::Json.parse("<html>oops</html>");
        assert!(matches!(result, Err(QueryError::Parse(_))));
    }

    #[test]
    fn test_process_walks_keys() {
        let keys = vec!["result".to_string(), "count".to_string()];
        let value = ResponseFormat::Json
            .process(r#"{"result": {"count": 3}}"#, &keys)
            .unwrap();
        assert_eq!(value, json!(3));
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: ResponseFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, ResponseFormat::Json);
        assert!(serde_json::from_str::<ResponseFormat>(r#""xml""#).is_err());
    }
}
