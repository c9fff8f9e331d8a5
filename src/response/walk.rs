use crate::error::{QueryError, Result};
use serde_json::Value;

/// Follow an ordered key path into a parsed response
///
/// Objects are indexed by key, arrays by the key read as a position.
/// The first key that does not resolve is reported in `KeyPathNotFound`.
pub fn walk_keys(mut value: Value, keys: &[String]) -> Result<Value> {
    for key in keys {
        let next = match &mut value {
            Value::Object(map) => map.remove(key),
            Value::Array(items) => key
                .parse::<usize>()
                .ok()
                .filter(|&index| index < items.len())
                .map(|index| items.swap_remove(index)),
            _ => None,
        };

        value = next.ok_or_else(|| QueryError::KeyPathNotFound(key.clone()))?;
    }

    Ok(value)
}
