//! Stat Card Component
//!
//! Headline numbers shown above each page's table.

use leptos::*;

/// Single labelled statistic
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="text-sm text-gray-400">{label}</div>
            <div class="text-2xl font-bold mt-1">{value}</div>
        </div>
    }
}

/// Page title with a one-line description
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-3xl font-bold">{title}</h1>
            <p class="text-gray-400 mt-1">{subtitle}</p>
        </div>
    }
}
