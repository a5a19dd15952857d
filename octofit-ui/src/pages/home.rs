//! Landing Page

use leptos::*;
use leptos_router::*;
use octofit::app::{APP_NAME, HOME_CARDS};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="text-center py-8">
                <h1 class="text-4xl font-bold">{format!("Welcome to {}", APP_NAME)}</h1>
                <p class="text-gray-400 mt-2">
                    "Track your fitness journey, compete with your team, and achieve your goals!"
                </p>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
                {HOME_CARDS
                    .into_iter()
                    .map(|(title, blurb, target)| view! {
                        <A
                            href=target.route()
                            class="bg-gray-800 rounded-lg p-6 border border-gray-700 hover:border-gray-500 transition"
                        >
                            <h2 class="text-xl font-semibold">{title}</h2>
                            <p class="text-gray-400 mt-2">{blurb}</p>
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
