//! Users page

use super::render::{self, Table};
use super::Page;
use crate::endpoint::Resource;
use crate::models::User;

/// How many users the "recently joined" list shows
pub const RECENT_LIMIT: usize = 4;

/// Counts across all users
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UserSummary {
    pub total: usize,
    pub active: usize,
    pub with_team: usize,
    pub total_points: f64,
}

impl UserSummary {
    pub fn from_records(users: &[User]) -> Self {
        Self {
            total: users.len(),
            active: users.iter().filter(|u| u.is_active()).count(),
            with_team: users.iter().filter(|u| u.has_team()).count(),
            total_points: users.iter().map(User::points_or_zero).sum(),
        }
    }
}

/// Users with a join date, newest first, at most [`RECENT_LIMIT`].
///
/// Join dates that cannot be parsed sort after every parseable one.
pub fn recently_joined(users: &[User]) -> Vec<&User> {
    let mut joined: Vec<&User> = users.iter().filter(|u| u.date_joined.is_some()).collect();
    joined.sort_by(|a, b| b.joined_at().cmp(&a.joined_at()));
    joined.truncate(RECENT_LIMIT);
    joined
}

/// "Active" or "Inactive", with ", Staff" for staff accounts
pub fn status_label(user: &User) -> String {
    let mut status = if user.is_active() { "Active" } else { "Inactive" }.to_string();
    if user.is_staff == Some(true) {
        status.push_str(", Staff");
    }
    status
}

pub struct UsersPage;

impl Page for UsersPage {
    type Record = User;
    const RESOURCE: Resource = Resource::Users;
    const EMPTY_MESSAGE: &'static str = "No users yet. Invite someone to join OctoFit!";

    fn render_records(users: &[User]) -> String {
        let summary = UserSummary::from_records(users);
        let mut out = render::stat_line(&[
            ("Total users", summary.total.to_string()),
            ("Active", summary.active.to_string()),
            ("On a team", summary.with_team.to_string()),
            ("Total points", render::whole(summary.total_points)),
        ]);
        out.push('\n');

        let mut table = Table::new()
            .column("Name")
            .column("Username")
            .column("Email")
            .column("Team")
            .numeric("Points")
            .column("Status");

        for user in users {
            table.row(vec![
                user.display_name(),
                render::text_or_dash(user.username.as_deref()),
                render::text_or_dash(user.email.as_deref()),
                render::text_or_dash(user.team_name.as_deref()),
                render::whole(user.points_or_zero()),
                status_label(user),
            ]);
        }
        out.push_str(&render::section("Members"));
        out.push_str(&table.render());

        let recent = recently_joined(users);
        if !recent.is_empty() {
            out.push_str(&render::section("Recently Joined"));
            for user in recent {
                let joined = user
                    .joined_at()
                    .map(|dt| dt.format("%b %d, %Y").to_string())
                    .or_else(|| user.date_joined.clone())
                    .unwrap_or_default();
                out.push_str(&format!("* {} ({})\n", user.display_name(), joined));
            }
        }
        out
    }
}
