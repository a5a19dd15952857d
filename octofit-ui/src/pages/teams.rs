//! Teams Page
//!
//! Ranking by points on top, team cards in server order below.

use leptos::*;
use octofit::models::Team;
use octofit::pages::render::whole;
use octofit::pages::teams::rank_teams;
use octofit::pages::{Page, TeamSummary, TeamsPage};

use crate::components::{state_view, PageHeader, StatCard};
use crate::state::use_page_state;

#[component]
pub fn Teams() -> impl IntoView {
    let state = use_page_state::<TeamsPage>();

    view! {
        <div class="space-y-8">
            <PageHeader title="Teams" subtitle="Join teams and work together" />
            {state_view(state, TeamsPage::EMPTY_MESSAGE, teams_body)}
        </div>
    }
}

fn teams_body(teams: Vec<Team>) -> View {
    let summary = TeamSummary::from_records(&teams);

    let ranking = rank_teams(&teams)
        .into_iter()
        .map(|ranked| {
            view! {
                <tr class="border-b border-gray-800">
                    <td>{ranked.rank}</td>
                    <td>{ranked.team.display_name().to_string()}</td>
                    <td class="text-right">{whole(ranked.team.points_or_zero())}</td>
                    <td class="text-right">{ranked.team.members_or_zero()}</td>
                    <td class="text-right">{whole(ranked.average_points)}</td>
                </tr>
            }
        })
        .collect_view();

    let cards = teams
        .iter()
        .map(|team| {
            let members = (!team.members.is_empty()).then(|| team.members.join(", "));
            view! {
                <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                    <h3 class="text-lg font-semibold">{team.display_name().to_string()}</h3>
                    <p class="text-gray-400">{team.description.clone().unwrap_or_default()}</p>
                    {members.map(|m| view! { <p class="text-sm mt-2">{format!("Members: {}", m)}</p> })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-3 gap-4">
                <StatCard label="Teams" value=summary.teams.to_string() />
                <StatCard label="Members" value=summary.members.to_string() />
                <StatCard label="Total points" value=whole(summary.total_points) />
            </div>

            <h2 class="text-xl font-semibold">"Team Rankings"</h2>
            <table class="w-full text-left">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th>"#"</th>
                        <th>"Team"</th>
                        <th class="text-right">"Points"</th>
                        <th class="text-right">"Members"</th>
                        <th class="text-right">"Avg/Member"</th>
                    </tr>
                </thead>
                <tbody>{ranking}</tbody>
            </table>

            <h2 class="text-xl font-semibold">"All Teams"</h2>
            <div class="grid md:grid-cols-2 gap-4">{cards}</div>
        </div>
    }
    .into_view()
}
