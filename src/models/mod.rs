//! Typed Records
//!
//! One optional-field record type per backend resource. Field fallbacks are
//! resolved once, when the raw JSON record is converted, so rendering code
//! never has to chase alternative field names.

pub mod activity;
pub mod fields;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::LeaderboardEntry;
pub use team::Team;
pub use user::User;
pub use workout::Workout;

use serde_json::Value;

/// Conversion from a raw backend record.
///
/// Never fails: a record missing every known field (or one that is not even
/// an object) produces a value with every field absent.
pub trait FromRecord: Sized {
    fn from_record(record: &Value) -> Self;
}

/// Resolve a whole normalized sequence, preserving order
pub fn resolve_all<T: FromRecord>(records: &[Value]) -> Vec<T> {
    records.iter().map(T::from_record).collect()
}
