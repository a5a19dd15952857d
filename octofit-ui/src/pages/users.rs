//! Users Page

use leptos::*;
use octofit::models::User;
use octofit::pages::render::{text_or_dash, whole};
use octofit::pages::users::{recently_joined, status_label};
use octofit::pages::{display_date, Page, UserSummary, UsersPage};

use crate::components::{state_view, PageHeader, StatCard};
use crate::state::use_page_state;

#[component]
pub fn Users() -> impl IntoView {
    let state = use_page_state::<UsersPage>();

    view! {
        <div class="space-y-8">
            <PageHeader title="Users" subtitle="Everyone on the board" />
            {state_view(state, UsersPage::EMPTY_MESSAGE, users_body)}
        </div>
    }
}

fn users_body(users: Vec<User>) -> View {
    let summary = UserSummary::from_records(&users);

    let recent_users = recently_joined(&users);
    let recent = (!recent_users.is_empty()).then(|| {
        let items = recent_users
            .into_iter()
            .map(|user| {
                view! {
                    <li>
                        {user.display_name()}
                        <span class="text-gray-400">{format!(" joined {}", display_date(user.date_joined.as_deref()))}</span>
                    </li>
                }
            })
            .collect_view();
        view! {
            <h2 class="text-xl font-semibold">"Recently Joined"</h2>
            <ul class="space-y-1">{items}</ul>
        }
    });

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-4 gap-4">
                <StatCard label="Total users" value=summary.total.to_string() />
                <StatCard label="Active" value=summary.active.to_string() />
                <StatCard label="On a team" value=summary.with_team.to_string() />
                <StatCard label="Total points" value=whole(summary.total_points) />
            </div>

            <table class="w-full text-left">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th>"Name"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Team"</th>
                        <th class="text-right">"Points"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {users
                        .iter()
                        .map(|user| view! {
                            <tr class="border-b border-gray-800">
                                <td>{user.display_name()}</td>
                                <td>{text_or_dash(user.username.as_deref())}</td>
                                <td>{text_or_dash(user.email.as_deref())}</td>
                                <td>{text_or_dash(user.team_name.as_deref())}</td>
                                <td class="text-right">{whole(user.points_or_zero())}</td>
                                <td>{status_label(user)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>

            {recent}
        </div>
    }
    .into_view()
}
