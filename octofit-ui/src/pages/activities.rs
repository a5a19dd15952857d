//! Activities Page

use leptos::*;
use octofit::models::Activity;
use octofit::pages::render::{number_or_dash, whole};
use octofit::pages::{display_date, ActivitiesPage, ActivitySummary, Page};

use crate::components::{state_view, PageHeader, StatCard};
use crate::state::use_page_state;

#[component]
pub fn Activities() -> impl IntoView {
    let state = use_page_state::<ActivitiesPage>();

    view! {
        <div class="space-y-8">
            <PageHeader title="Activities" subtitle="Every logged workout" />
            {state_view(state, ActivitiesPage::EMPTY_MESSAGE, activities_body)}
        </div>
    }
}

fn activities_body(activities: Vec<Activity>) -> View {
    let summary = ActivitySummary::from_records(&activities);

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-3 gap-4">
                <StatCard label="Total activities" value=summary.total.to_string() />
                <StatCard label="Total minutes" value=whole(summary.total_duration) />
                <StatCard label="Calories burned" value=whole(summary.total_calories) />
            </div>

            <table class="w-full text-left">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th>"Activity"</th>
                        <th>"User"</th>
                        <th class="text-right">"Duration (min)"</th>
                        <th class="text-right">"Calories"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {activities
                        .iter()
                        .map(|a| view! {
                            <tr class="border-b border-gray-800">
                                <td>{a.activity_display().to_string()}</td>
                                <td>{a.user_display().to_string()}</td>
                                <td class="text-right">{number_or_dash(a.duration)}</td>
                                <td class="text-right">{number_or_dash(a.calories_burned)}</td>
                                <td>{display_date(a.date.as_deref())}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
