//! Activity log entries

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{fields, FromRecord};

/// A logged activity.
///
/// Fallbacks: `user` → `user_name`; `activity` → `activity_type` → `name` →
/// `type`; `calories_burned` → `calories`. `user` may be an embedded user
/// object, in which case its name is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Option<String>,
    pub user: Option<String>,
    pub activity: Option<String>,
    /// Minutes
    pub duration: Option<f64>,
    pub calories_burned: Option<f64>,
    pub date: Option<String>,
}

impl FromRecord for Activity {
    fn from_record(record: &Value) -> Self {
        Self {
            id: fields::id(record),
            user: fields::text(record, &["user", "user_name"]),
            activity: fields::text(record, &["activity", "activity_type", "name", "type"]),
            duration: fields::number(record, &["duration"]),
            calories_burned: fields::number(record, &["calories_burned", "calories"]),
            date: fields::text(record, &["date"]),
        }
    }
}

impl Activity {
    pub fn user_display(&self) -> &str {
        self.user.as_deref().unwrap_or("Unknown User")
    }

    pub fn activity_display(&self) -> &str {
        self.activity.as_deref().unwrap_or("Unknown Activity")
    }

    pub fn duration_or_zero(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }

    pub fn calories_or_zero(&self) -> f64 {
        self.calories_burned.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embedded_user_shape() {
        let record = json!({
            "_id": "65f0c0000000000000000101",
            "user": {"_id": "u1", "name": "Spider-Man", "email": "spiderman@marvel.com"},
            "type": "Running",
            "duration": 30,
            "calories": 300
        });
        let activity = Activity::from_record(&record);
        assert_eq!(activity.id.as_deref(), Some("65f0c0000000000000000101"));
        assert_eq!(activity.user_display(), "Spider-Man");
        assert_eq!(activity.activity_display(), "Running");
        assert_eq!(activity.duration, Some(30.0));
        assert_eq!(activity.calories_burned, Some(300.0));
    }

    #[test]
    fn test_flat_shape_precedence() {
        let record = json!({
            "id": 4,
            "user_name": "peter",
            "activity_type": "Cycling",
            "name": "Morning ride",
            "duration": "45",
            "calories_burned": 410,
            "calories": 999,
            "date": "2024-05-01"
        });
        let activity = Activity::from_record(&record);
        assert_eq!(activity.user_display(), "peter");
        assert_eq!(activity.activity_display(), "Cycling");
        assert_eq!(activity.duration_or_zero(), 45.0);
        assert_eq!(activity.calories_or_zero(), 410.0);
        assert_eq!(activity.date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_missing_fields_default() {
        let activity = Activity::from_record(&json!({"duration": "n/a"}));
        assert_eq!(activity.user_display(), "Unknown User");
        assert_eq!(activity.duration_or_zero(), 0.0);
        assert_eq!(Activity::from_record(&json!(17)), Activity::default());
    }
}
