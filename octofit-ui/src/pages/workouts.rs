//! Workouts Page

use leptos::*;
use octofit::models::Workout;
use octofit::pages::render::{number_or_dash, text_or_dash, whole};
use octofit::pages::workouts::CATEGORIES;
use octofit::pages::{Page, WorkoutSummary, WorkoutsPage};

use crate::components::{state_view, PageHeader, StatCard};
use crate::state::use_page_state;

#[component]
pub fn Workouts() -> impl IntoView {
    let state = use_page_state::<WorkoutsPage>();

    view! {
        <div class="space-y-8">
            <PageHeader title="Workouts" subtitle="Discover personalized routines" />
            {state_view(state, WorkoutsPage::EMPTY_MESSAGE, workouts_body)}
        </div>
    }
}

fn workouts_body(workouts: Vec<Workout>) -> View {
    let summary = WorkoutSummary::from_records(&workouts);

    let categories = CATEGORIES
        .iter()
        .zip(summary.category_counts)
        .map(|((_, label), count)| view! { <StatCard label=*label value=count.to_string() /> })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-4 gap-4">
                <StatCard label="Workouts" value=summary.total.to_string() />
                <StatCard label="Avg duration (min)" value=whole(summary.average_duration) />
                <StatCard label="Avg calories" value=whole(summary.average_calories) />
                <StatCard label="Types" value=summary.distinct_types.to_string() />
            </div>
            <div class="grid md:grid-cols-4 gap-4">{categories}</div>

            <h2 class="text-xl font-semibold">"Suggested Workouts"</h2>
            <table class="w-full text-left">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th>"Workout"</th>
                        <th>"Type"</th>
                        <th>"Difficulty"</th>
                        <th class="text-right">"Duration (min)"</th>
                        <th class="text-right">"Calories"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    {workouts
                        .iter()
                        .map(|w| view! {
                            <tr class="border-b border-gray-800">
                                <td>{w.display_name().to_string()}</td>
                                <td>{text_or_dash(w.kind.as_deref())}</td>
                                <td>{text_or_dash(w.difficulty.as_deref())}</td>
                                <td class="text-right">{number_or_dash(w.duration)}</td>
                                <td class="text-right">{number_or_dash(w.calories_burned)}</td>
                                <td>{text_or_dash(w.description.as_deref())}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
