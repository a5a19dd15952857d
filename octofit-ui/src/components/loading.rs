//! Loading, Error and Empty States
//!
//! The non-populated faces of a page, plus [`state_view`] which picks the
//! right one for the current `ViewState`.

use leptos::*;
use octofit::view::ViewState;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Red banner for a failed fetch
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-900/40 border border-red-700 text-red-200 rounded-lg px-4 py-3">
            <strong>"Error loading data: "</strong>
            {message}
        </div>
    }
}

/// Call to action when the backend returned nothing
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <p class="text-gray-400">{message}</p>
        </div>
    }
}

/// Render a page's state: spinner, error banner over any held records,
/// empty call to action, or the populated body.
pub fn state_view<T, F>(
    state: ReadSignal<ViewState<T>>,
    empty: &'static str,
    body: F,
) -> impl IntoView
where
    T: Clone + 'static,
    F: Fn(Vec<T>) -> View + 'static,
{
    move || match state.get() {
        ViewState::Loading { records } | ViewState::Ready { records } if !records.is_empty() => {
            body(records)
        }
        ViewState::Loading { .. } => view! { <Loading /> }.into_view(),
        ViewState::Ready { .. } => view! { <EmptyState message=empty /> }.into_view(),
        ViewState::Failed { message, records } => {
            let held = (!records.is_empty()).then(|| body(records));
            view! {
                <div class="space-y-6">
                    <ErrorBanner message=message />
                    {held}
                </div>
            }
            .into_view()
        }
    }
}
