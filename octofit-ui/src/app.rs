//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;
use octofit::app::APP_NAME;
use octofit::endpoint::Resource;

use crate::api;
use crate::components::Nav;
use crate::pages::{Activities, Home, Leaderboard, Teams, Users, Workouts};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/activities" view=Activities />
                        <Route path="/leaderboard" view=Leaderboard />
                        <Route path="/teams" view=Teams />
                        <Route path="/users" view=Users />
                        <Route path="/workouts" view=Workouts />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer with the backend address in use
#[component]
fn Footer() -> impl IntoView {
    let base_url = api::resolver().base_url();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <span>{format!("{} - Track. Compete. Achieve.", APP_NAME)}</span>
                <span class="text-gray-400">{format!("Backend: {}", base_url)}</span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">
                {move || format!("No page lives at '{}'.", location.pathname.get())}
            </p>
            <div class="flex space-x-2">
                {Resource::ALL
                    .into_iter()
                    .map(|r| view! {
                        <A
                            href=r.route()
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            {r.title()}
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
