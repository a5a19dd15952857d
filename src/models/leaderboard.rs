//! Leaderboard standings

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{fields, FromRecord};

/// One leaderboard row, in the order the server ranked it.
///
/// Fallbacks: `user_name` → `name` → `user`; `total_points` → `points`;
/// `activity_count` → `activities` (count or list); `team_name` → `team`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: Option<String>,
    pub user_name: Option<String>,
    pub total_points: Option<f64>,
    pub activity_count: Option<u64>,
    pub team_name: Option<String>,
}

impl FromRecord for LeaderboardEntry {
    fn from_record(record: &Value) -> Self {
        Self {
            id: fields::id(record),
            user_name: fields::text(record, &["user_name", "name", "user"]),
            total_points: fields::number(record, &["total_points", "points"]),
            activity_count: fields::count(record, &["activity_count", "activities"]),
            team_name: fields::text(record, &["team_name", "team"]),
        }
    }
}

impl LeaderboardEntry {
    /// Entry label. Team-only standings fall back to the team name.
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .or(self.team_name.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn points_or_zero(&self) -> f64 {
        self.total_points.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_standing_shape() {
        let record = json!({"_id": "lb1", "team": {"_id": "t1", "name": "DC"}, "points": 800});
        let entry = LeaderboardEntry::from_record(&record);
        assert_eq!(entry.team_name.as_deref(), Some("DC"));
        assert_eq!(entry.display_name(), "DC");
        assert_eq!(entry.points_or_zero(), 800.0);
        assert_eq!(entry.activity_count, None);
    }

    #[test]
    fn test_user_standing_shape() {
        let record = json!({
            "name": "Iron Man",
            "total_points": 120,
            "points": 5,
            "activities": [{}, {}],
            "team_name": "Marvel"
        });
        let entry = LeaderboardEntry::from_record(&record);
        assert_eq!(entry.display_name(), "Iron Man");
        assert_eq!(entry.points_or_zero(), 120.0);
        assert_eq!(entry.activity_count, Some(2));
    }
}
