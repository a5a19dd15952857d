//! Seed Data
//!
//! Fixtures served by the development backend, in the shape the real
//! backend's serializers produce: string `_id` keys and embedded team and
//! user objects.

use serde_json::{json, Value};

use crate::endpoint::Resource;

/// In-memory records for every resource
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub activities: Vec<Value>,
    pub leaderboard: Vec<Value>,
    pub teams: Vec<Value>,
    pub users: Vec<Value>,
    pub workouts: Vec<Value>,
}

/// 24-hex-digit identifier in the style of a document store id
fn object_id(n: u64) -> String {
    format!("{:024x}", 0x6650_0000_0000_0000_0000_0000u128 + n as u128)
}

impl SeedData {
    /// The superhero fixtures: two teams, four users, four activities,
    /// two workouts and a two-team leaderboard.
    pub fn populate() -> Self {
        let marvel = json!({ "_id": object_id(1), "name": "Marvel" });
        let dc = json!({ "_id": object_id(2), "name": "DC" });

        let user = |n: u64, name: &str, email: &str, team: &Value| {
            json!({
                "_id": object_id(n),
                "name": name,
                "email": email,
                "team": team,
            })
        };
        let users = vec![
            user(11, "Spider-Man", "spiderman@marvel.com", &marvel),
            user(12, "Iron Man", "ironman@marvel.com", &marvel),
            user(13, "Wonder Woman", "wonderwoman@dc.com", &dc),
            user(14, "Batman", "batman@dc.com", &dc),
        ];

        let activities = [
            ("Running", 30, 300),
            ("Cycling", 45, 450),
            ("Swimming", 60, 600),
            ("Yoga", 40, 200),
        ]
        .into_iter()
        .zip(&users)
        .enumerate()
        .map(|(i, ((kind, duration, calories), owner))| {
            json!({
                "_id": object_id(21 + i as u64),
                "user": owner,
                "type": kind,
                "duration": duration,
                "calories": calories,
            })
        })
        .collect();

        let workouts = vec![
            json!({
                "_id": object_id(31),
                "name": "Cardio Blast",
                "description": "High intensity cardio workout",
                "difficulty": "Hard",
            }),
            json!({
                "_id": object_id(32),
                "name": "Strength Builder",
                "description": "Full body strength training",
                "difficulty": "Medium",
            }),
        ];

        let leaderboard = vec![
            json!({ "_id": object_id(41), "team": marvel, "points": 750 }),
            json!({ "_id": object_id(42), "team": dc, "points": 800 }),
        ];

        Self {
            activities,
            leaderboard,
            teams: vec![marvel, dc],
            users,
            workouts,
        }
    }

    pub fn records(&self, resource: Resource) -> &[Value] {
        match resource {
            Resource::Activities => &self.activities,
            Resource::Leaderboard => &self.leaderboard,
            Resource::Teams => &self.teams,
            Resource::Users => &self.users,
            Resource::Workouts => &self.workouts,
        }
    }
}
