//! Workout suggestions

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{fields, FromRecord};

/// A suggested workout. `kind` is read from `type`, then `workout_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub difficulty: Option<String>,
    /// Minutes
    pub duration: Option<f64>,
    pub calories_burned: Option<f64>,
    pub description: Option<String>,
}

impl FromRecord for Workout {
    fn from_record(record: &Value) -> Self {
        Self {
            id: fields::id(record),
            name: fields::text(record, &["name"]),
            kind: fields::text(record, &["type", "workout_type"]),
            difficulty: fields::text(record, &["difficulty"]),
            duration: fields::number(record, &["duration"]),
            calories_burned: fields::number(record, &["calories_burned"]),
            description: fields::text(record, &["description"]),
        }
    }
}

impl Workout {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Workout")
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
    fn test_seed_shape() {
        let workout = Workout::from_record(&json!({
            "_id": "w1",
            "name": "Cardio Blast",
            "description": "High intensity cardio workout",
            "difficulty": "Hard"
        }));
        assert_eq!(workout.display_name(), "Cardio Blast");
        assert_eq!(workout.difficulty.as_deref(), Some("Hard"));
        assert_eq!(workout.kind, None);
        assert_eq!(workout.duration_or_zero(), 0.0);
    }

    #[test]
    fn test_type_fallback() {
        let workout = Workout::from_record(&json!({"workout_type": "strength", "duration": 40}));
        assert_eq!(workout.kind.as_deref(), Some("strength"));
    }
}
