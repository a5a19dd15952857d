//! Users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{fields, FromRecord};

/// A user profile. `team_name` falls back to `team` (string or object).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub team_name: Option<String>,
    pub total_points: Option<f64>,
    pub activity_count: Option<u64>,
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub date_joined: Option<String>,
}

impl FromRecord for User {
    fn from_record(record: &Value) -> Self {
        Self {
            id: fields::id(record),
            first_name: fields::text(record, &["first_name"]),
            last_name: fields::text(record, &["last_name"]),
            username: fields::text(record, &["username"]),
            name: fields::text(record, &["name"]),
            email: fields::text(record, &["email"]),
            team_name: fields::text(record, &["team_name", "team"]),
            total_points: fields::number(record, &["total_points"]),
            activity_count: fields::count(record, &["activity_count"]),
            is_active: fields::flag(record, &["is_active"]),
            is_staff: fields::flag(record, &["is_staff"]),
            date_joined: fields::text(record, &["date_joined"]),
        }
    }
}

impl User {
    /// "First Last" when either part exists, then `name`, then `username`
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        if !full.is_empty() {
            full
        } else {
            self.name
                .clone()
                .or_else(|| self.username.clone())
                .unwrap_or_else(|| "Unknown User".to_string())
        }
    }

    /// Active unless explicitly flagged inactive
    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }

    pub fn has_team(&self) -> bool {
        self.team_name.is_some()
    }

    pub fn points_or_zero(&self) -> f64 {
        self.total_points.unwrap_or(0.0)
    }

    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        self.date_joined.as_deref().and_then(fields::parse_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_precedence() {
        let user = User::from_record(&json!({"first_name": "Diana", "last_name": "Prince", "name": "Wonder Woman"}));
        assert_eq!(user.display_name(), "Diana Prince");

        let user = User::from_record(&json!({"name": "Batman", "username": "bruce"}));
        assert_eq!(user.display_name(), "Batman");

        let user = User::from_record(&json!({"username": "bruce"}));
        assert_eq!(user.display_name(), "bruce");

        assert_eq!(User::from_record(&json!({})).display_name(), "Unknown User");
    }

    #[test]
    fn test_active_unless_flagged() {
        assert!(User::from_record(&json!({})).is_active());
        assert!(User::from_record(&json!({"is_active": true})).is_active());
        assert!(!User::from_record(&json!({"is_active": false})).is_active());
    }

    #[test]
    fn test_embedded_team() {
        let user = User::from_record(&json!({
            "_id": "u3",
            "name": "Wonder Woman",
            "email": "wonderwoman@dc.com",
            "team": {"_id": "t2", "name": "DC"}
        }));
        assert_eq!(user.team_name.as_deref(), Some("DC"));
        assert!(user.has_team());
        assert_eq!(user.email.as_deref(), Some("wonderwoman@dc.com"));
    }
}
