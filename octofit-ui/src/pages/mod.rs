//! Page Components
//!
//! Landing page plus one page per backend resource.

pub mod activities;
pub mod home;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

pub use activities::Activities;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use teams::Teams;
pub use users::Users;
pub use workouts::Workouts;
