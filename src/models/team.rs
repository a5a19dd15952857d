//! Teams

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{fields, FromRecord};

/// A team. `member_count` falls back to the length of `members`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub member_count: Option<u64>,
    pub members: Vec<String>,
    pub total_points: Option<f64>,
    pub created_at: Option<String>,
}

impl FromRecord for Team {
    fn from_record(record: &Value) -> Self {
        Self {
            id: fields::id(record),
            name: fields::text(record, &["name"]),
            description: fields::text(record, &["description"]),
            member_count: fields::count(record, &["member_count", "members"]),
            members: fields::names(record, "members"),
            total_points: fields::number(record, &["total_points"]),
            created_at: fields::text(record, &["created_at"]),
        }
    }
}

impl Team {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Team")
    }

    pub fn points_or_zero(&self) -> f64 {
        self.total_points.unwrap_or(0.0)
    }

    pub fn members_or_zero(&self) -> u64 {
        self.member_count.unwrap_or(0)
    }

    /// Points per member; 0 for a team without members
    pub fn average_points(&self) -> f64 {
        match self.members_or_zero() {
            0 => 0.0,
            n => self.points_or_zero() / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_members_list() {
        let record = json!({
            "id": 1,
            "name": "Marvel",
            "members": [{"name": "Spider-Man"}, "Iron Man"],
            "total_points": 750
        });
        let team = Team::from_record(&record);
        assert_eq!(team.member_count, Some(2));
        assert_eq!(team.members, vec!["Spider-Man", "Iron Man"]);
        assert_eq!(team.average_points(), 375.0);
    }

    #[test]
    fn test_zero_members_average_is_zero() {
        let team = Team::from_record(&json!({"name": "Empty", "member_count": 0, "total_points": 90}));
        assert_eq!(team.average_points(), 0.0);

        let team = Team::from_record(&json!({"name": "Unknown size", "total_points": 90}));
        assert_eq!(team.average_points(), 0.0);
    }
}
