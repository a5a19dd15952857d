//! Pages
//!
//! The presentation layer: one page per resource, each a pure function from
//! [`ViewState`] to text markup. Aggregate statistics are recomputed from
//! the held records on every render.

pub mod activities;
pub mod leaderboard;
pub mod render;
pub mod teams;
pub mod users;
pub mod workouts;

pub use activities::{display_date, ActivitiesPage, ActivitySummary};
pub use leaderboard::LeaderboardPage;
pub use teams::{TeamsPage, TeamSummary};
pub use users::{UserSummary, UsersPage};
pub use workouts::{WorkoutSummary, WorkoutsPage};

use serde::Serialize;

use crate::endpoint::Resource;
use crate::models::FromRecord;
use crate::view::ViewState;

/// A page bound to one backend resource
pub trait Page {
    /// Typed record the page displays
    type Record: FromRecord + Serialize + Clone + Send + Sync + 'static;

    /// Resource the page fetches
    const RESOURCE: Resource;

    /// Call to action shown when the backend returned nothing
    const EMPTY_MESSAGE: &'static str;

    /// Render a non-empty record set (statistics and table)
    fn render_records(records: &[Self::Record]) -> String;
}

/// Render a page for its current state.
///
/// Loading shows a spinner line, an error shows a banner above any records
/// still held from before, an empty result shows the call to action.
pub fn render_page<P: Page>(state: &ViewState<P::Record>) -> String {
    let title = P::RESOURCE.title();
    let mut out = render::heading(title);

    match state {
        ViewState::Loading { records } if records.is_empty() => {
            out.push_str(&format!("Loading {}...\n", title.to_lowercase()));
        }
        ViewState::Loading { records } => {
            out.push_str("Refreshing...\n\n");
            out.push_str(&P::render_records(records));
        }
        ViewState::Failed { message, records } => {
            out.push_str(&render::error_banner(message));
            if !records.is_empty() {
                out.push('\n');
                out.push_str(&P::render_records(records));
            }
        }
        ViewState::Ready { records } if records.is_empty() => {
            out.push_str(P::EMPTY_MESSAGE);
            out.push('\n');
        }
        ViewState::Ready { records } => {
            out.push_str(&P::render_records(records));
        }
    }

    out
}
