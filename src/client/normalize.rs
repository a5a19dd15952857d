//! Response normalization
//!
//! The backend answers either with a paginated envelope
//! (`{"count": .., "results": [..]}`) or with a bare JSON array. Both collapse
//! into one ordered record sequence here.

use serde_json::Value;

use super::error::FetchResult;

/// Extract the record sequence from a parsed response body.
///
/// - object with `results` → the `results` array (empty if it is not an array)
/// - array → the array itself
/// - anything else → empty
pub fn normalize(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        Value::Array(records) => records,
        _ => Vec::new(),
    }
}

/// Parse a response body as JSON and normalize it
pub fn parse_body(body: &str) -> FetchResult<Vec<Value>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(normalize(value))
}
