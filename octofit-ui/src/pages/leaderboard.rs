//! Leaderboard Page
//!
//! Rows keep the server's order; podium places get a medal.

use leptos::*;
use octofit::models::LeaderboardEntry;
use octofit::pages::leaderboard::{medal, ranked};
use octofit::pages::render::{text_or_dash, whole};
use octofit::pages::{LeaderboardPage, Page};

use crate::components::{state_view, PageHeader, StatCard};
use crate::state::use_page_state;

#[component]
pub fn Leaderboard() -> impl IntoView {
    let state = use_page_state::<LeaderboardPage>();

    view! {
        <div class="space-y-8">
            <PageHeader title="Leaderboard" subtitle="See how you rank against others" />
            {state_view(state, LeaderboardPage::EMPTY_MESSAGE, leaderboard_body)}
        </div>
    }
}

fn medal_icon(rank: usize) -> &'static str {
    match medal(rank) {
        Some("Gold") => "🥇",
        Some("Silver") => "🥈",
        Some("Bronze") => "🥉",
        _ => "",
    }
}

fn leaderboard_body(entries: Vec<LeaderboardEntry>) -> View {
    let leader = entries
        .first()
        .map(|e| e.display_name().to_string())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-2 gap-4">
                <StatCard label="Competitors" value=entries.len().to_string() />
                <StatCard label="Leader" value=leader />
            </div>

            <table class="w-full text-left">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th>"Rank"</th>
                        <th>"Name"</th>
                        <th>"Team"</th>
                        <th class="text-right">"Points"</th>
                        <th class="text-right">"Activities"</th>
                    </tr>
                </thead>
                <tbody>
                    {ranked(&entries)
                        .map(|(rank, entry)| view! {
                            <tr class="border-b border-gray-800">
                                <td>{format!("{} {}", rank, medal_icon(rank))}</td>
                                <td>{entry.display_name().to_string()}</td>
                                <td>{text_or_dash(entry.team_name.as_deref())}</td>
                                <td class="text-right">{whole(entry.points_or_zero())}</td>
                                <td class="text-right">
                                    {entry.activity_count.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}
                                </td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
