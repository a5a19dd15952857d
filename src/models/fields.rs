//! Lenient field access over raw JSON records.
//!
//! The backend's field names drift between deployments, so every typed
//! record is resolved through these helpers: each takes a list of candidate
//! keys and returns the value of the first one that is present and has a
//! usable shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Display text: strings as-is, numbers formatted, objects by their name.
///
/// Keys whose value has no textual form are skipped.
pub fn text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(as_text)
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(_) => text(value, &["name", "username"]),
        _ => None,
    }
}

/// Number from a JSON number or a numeric string
pub fn number(record: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(as_number)
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Count from a number, a numeric string, or the length of a list
pub fn count(record: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(|value| match value {
            Value::Array(items) => Some(items.len() as u64),
            other => as_number(other).filter(|n| *n >= 0.0).map(|n| n as u64),
        })
}

/// Boolean from a JSON bool or the strings `"true"` / `"false"`
pub fn flag(record: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(|value| match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        })
}

/// Names from a list of strings or objects
pub fn names(record: &Value, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(as_text).collect())
        .unwrap_or_default()
}

/// Record identifier from `id`, falling back to Mongo-style `_id`
pub fn id(record: &Value) -> Option<String> {
    text(record, &["id", "_id"])
}

/// Parse a backend timestamp: RFC 3339, naive datetime, or plain date
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_fallbacks() {
        let record = json!({
            "user": {"_id": "x", "name": "Batman"},
            "user_name": "bruce",
            "empty": "",
            "id": 7
        });
        assert_eq!(text(&record, &["user", "user_name"]), Some("Batman".to_string()));
        assert_eq!(text(&record, &["empty", "user_name"]), Some("bruce".to_string()));
        assert_eq!(text(&record, &["id"]), Some("7".to_string()));
        assert_eq!(text(&json!("scalar"), &["name"]), None);
    }

    #[test]
    fn test_number_parsing() {
        let record = json!({"a": "45", "b": "abc", "c": 12.5, "d": true});
        assert_eq!(number(&record, &["a"]), Some(45.0));
        assert_eq!(number(&record, &["b"]), None);
        assert_eq!(number(&record, &["b", "c"]), Some(12.5));
        assert_eq!(number(&record, &["d"]), None);
    }

    #[test]
    fn test_count_from_list() {
        let record = json!({"members": ["a", "b", "c"], "member_count": 0});
        assert_eq!(count(&record, &["members"]), Some(3));
        assert_eq!(count(&record, &["member_count", "members"]), Some(0));
    }

    #[test]
    fn test_flag() {
        let record = json!({"a": false, "b": "TRUE", "c": 1});
        assert_eq!(flag(&record, &["a"]), Some(false));
        assert_eq!(flag(&record, &["b"]), Some(true));
        assert_eq!(flag(&record, &["c"]), None);
    }

    #[test]
    fn test_id_fallback() {
        assert_eq!(id(&json!({"_id": "65f0"})), Some("65f0".to_string()));
        assert_eq!(id(&json!({"id": 3, "_id": "65f0"})), Some("3".to_string()));
        assert_eq!(id(&json!({})), None);
    }

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp("2024-03-01T10:00:00Z").is_some());
        assert!(parse_timestamp("2024-03-01T10:00:00.123456").is_some());
        assert!(parse_timestamp("2024-03-01").is_some());
        assert!(parse_timestamp("last tuesday").is_none());

        let earlier = parse_timestamp("2024-03-01").unwrap();
        let later = parse_timestamp("2024-03-01T10:00:00Z").unwrap();
        assert!(later > earlier);
    }
}
